use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ArbyError, Result};

/// Derive a locale identifier from a file path by keeping ASCII letters only.
///
/// `lib/l10n/app_en.arb` becomes `liblnappenarb`.
pub fn locale_id_from_path(path: &str) -> String {
    path.chars().filter(char::is_ascii_alphabetic).collect()
}

/// One locale column of the table: the file it was loaded from and its identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleColumn {
    pub locale: String,
    pub file_path: String,
}

impl LocaleColumn {
    pub fn from_path(file_path: impl Into<String>) -> Result<Self> {
        let file_path = file_path.into();
        let locale = locale_id_from_path(&file_path);
        if locale.is_empty() {
            return Err(ArbyError::EmptyLocale(file_path));
        }
        Ok(Self { locale, file_path })
    }
}

/// Build one column per file path, rejecting paths that normalize to the same locale.
pub fn columns_from_paths<S: AsRef<str>>(paths: &[S]) -> Result<Vec<LocaleColumn>> {
    let mut seen: HashMap<String, String> = HashMap::new();
    let mut columns = Vec::with_capacity(paths.len());

    for path in paths {
        let column = LocaleColumn::from_path(path.as_ref())?;
        if let Some(first) = seen.get(&column.locale) {
            return Err(ArbyError::LocaleCollision {
                locale: column.locale,
                first: first.clone(),
                second: column.file_path,
            });
        }
        seen.insert(column.locale.clone(), column.file_path.clone());
        columns.push(column);
    }

    Ok(columns)
}

/// Parsed contents of one locale file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocaleDocument {
    pub locale: String,
    pub entries: Map<String, Value>,
}

impl LocaleDocument {
    pub fn new(locale: impl Into<String>, entries: Map<String, Value>) -> Self {
        Self {
            locale: locale.into(),
            entries,
        }
    }

    pub fn empty(locale: impl Into<String>) -> Self {
        Self::new(locale, Map::new())
    }

    /// Parse file text as a JSON object.
    ///
    /// Fails if the text is not JSON or its root is not an object.
    pub fn parse(locale: impl Into<String>, content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(entries) => Ok(Self::new(locale, entries)),
            other => Err(ArbyError::UnexpectedResponse(format!(
                "root of a locale file must be an object, found {}",
                json_type_name(&other)
            ))),
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
