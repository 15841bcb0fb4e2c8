use serde_json::Value;

use super::{
    key_kind::KeyKind,
    row::{Row, is_blank},
};

/// Render ordered rows as one locale's ARB file.
///
/// Rows with no value for `locale` are left out. Each written row is one
/// two-space indented `"key": value` line. Annotation values are written as
/// compact JSON; all other values as JSON string literals. Lines are joined
/// with commas, so the last written line never carries one, no matter how many
/// rows were skipped after it.
///
/// ```text
/// {
///   "@@locale": "en",
///   "a": "Hi",
///   "@a": {"type":"text"}
/// }
/// ```
pub fn serialize(ordered: &[&Row], locale: &str) -> String {
    let lines: Vec<String> = ordered
        .iter()
        .filter_map(|row| {
            let value = row.value(locale);
            if is_blank(value) {
                return None;
            }
            let value = value?;
            Some(format!(
                "  {}: {}",
                quote(&row.key),
                format_value(row.kind(), value)
            ))
        })
        .collect();

    if lines.is_empty() {
        return "{}".to_string();
    }

    format!("{{\n{}\n}}", lines.join(",\n"))
}

fn format_value(kind: KeyKind, value: &Value) -> String {
    match (kind, value) {
        (KeyKind::Annotation, value) => value.to_string(),
        (_, Value::String(s)) => quote(s),
        (_, other) => quote(&other.to_string()),
    }
}

fn quote(s: &str) -> String {
    Value::String(s.to_string()).to_string()
}
