use std::fmt;

/// Prefix character that marks meta and annotation keys.
pub const SIGIL: char = '@';

/// Kind of an ARB key, decided by its leading sigils.
///
/// - `@@locale` is a **Meta** key: document-level metadata, always written first.
/// - `@title` is an **Annotation** key: structured metadata about `title`,
///   always written directly after it.
/// - `title` is a **Plain** key: an ordinary translated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyKind {
    Meta,
    Annotation,
    Plain,
}

impl KeyKind {
    pub fn classify(key: &str) -> Self {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(SIGIL), Some(SIGIL)) => KeyKind::Meta,
            (Some(SIGIL), _) => KeyKind::Annotation,
            _ => KeyKind::Plain,
        }
    }
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Meta => write!(f, "meta"),
            KeyKind::Annotation => write!(f, "annotation"),
            KeyKind::Plain => write!(f, "plain"),
        }
    }
}

/// The key an annotation describes (`@title` -> `title`).
///
/// Returns `None` for meta and plain keys.
pub fn annotation_base(key: &str) -> Option<&str> {
    match KeyKind::classify(key) {
        KeyKind::Annotation => key.strip_prefix(SIGIL),
        KeyKind::Meta | KeyKind::Plain => None,
    }
}

/// The annotation key for a plain key (`title` -> `@title`).
pub fn annotation_key(base: &str) -> String {
    format!("{}{}", SIGIL, base)
}
