use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::key_kind::KeyKind;
use crate::error::{ArbyError, Result};

/// One locale's slot in a row.
///
/// `previous` is captured when the row set is built and is never edited;
/// comparing it with `value` tells whether the user changed the cell.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<Value>,
    pub previous: Option<Value>,
}

impl Cell {
    /// A freshly loaded cell: current and previous value are the same.
    pub fn loaded(value: Option<Value>) -> Self {
        let value = value.filter(|v| !v.is_null());
        Self {
            previous: value.clone(),
            value,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.value != self.previous
    }
}

/// Returns true if a value must not be written back to a locale file.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// A translation key with one cell per locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub key: String,
    cells: BTreeMap<String, Cell>,
}

impl Row {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn kind(&self) -> KeyKind {
        KeyKind::classify(&self.key)
    }

    pub fn cell(&self, locale: &str) -> Option<&Cell> {
        self.cells.get(locale)
    }

    pub fn value(&self, locale: &str) -> Option<&Value> {
        self.cells.get(locale).and_then(|cell| cell.value.as_ref())
    }

    pub fn previous_value(&self, locale: &str) -> Option<&Value> {
        self.cells.get(locale).and_then(|cell| cell.previous.as_ref())
    }

    pub(crate) fn insert_cell(&mut self, locale: impl Into<String>, cell: Cell) {
        self.cells.insert(locale.into(), cell);
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.cells.iter().map(|(locale, cell)| (locale.as_str(), cell))
    }
}

/// On-disk shape of a [`RowSet`]; the key index is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct RowSetRepr {
    locales: Vec<String>,
    rows: Vec<Row>,
}

/// The unified table: every key of every loaded locale, in first-seen order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RowSetRepr", into = "RowSetRepr")]
pub struct RowSet {
    locales: Vec<String>,
    rows: Vec<Row>,
    index: HashMap<String, usize>,
}

impl RowSet {
    pub fn new(locales: Vec<String>) -> Self {
        Self {
            locales,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Locales present in this session, in column order.
    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&Row> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    /// Rows in natural (insertion) order.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.key.as_str())
    }

    /// Get the row for `key`, appending an empty one (with a cell per locale) if absent.
    pub(crate) fn entry(&mut self, key: &str) -> &mut Row {
        let i = match self.index.get(key) {
            Some(&i) => i,
            None => {
                let mut row = Row::new(key);
                for locale in &self.locales {
                    row.insert_cell(locale.clone(), Cell::default());
                }
                self.rows.push(row);
                self.index.insert(key.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };
        &mut self.rows[i]
    }

    /// Replace the current value of one cell. The previous value is left untouched.
    ///
    /// A blank value (`null` or `""`) clears the cell.
    pub fn set_value(&mut self, key: &str, locale: &str, value: Option<Value>) -> Result<()> {
        if !self.locales.iter().any(|l| l == locale) {
            return Err(ArbyError::UnknownLocale(locale.to_string()));
        }
        let i = *self
            .index
            .get(key)
            .ok_or_else(|| ArbyError::UnknownKey(key.to_string()))?;

        let value = if is_blank(value.as_ref()) { None } else { value };
        self.rows[i]
            .cells
            .entry(locale.to_string())
            .or_default()
            .value = value;
        Ok(())
    }

    /// Cells whose current value differs from the loaded one, in row then column order.
    pub fn changed_cells(&self) -> Vec<(&Row, &str, &Cell)> {
        let mut changed = Vec::new();
        for row in &self.rows {
            for locale in &self.locales {
                if let Some(cell) = row.cell(locale)
                    && cell.is_changed()
                {
                    changed.push((row, locale.as_str(), cell));
                }
            }
        }
        changed
    }
}

impl From<RowSet> for RowSetRepr {
    fn from(set: RowSet) -> Self {
        Self {
            locales: set.locales,
            rows: set.rows,
        }
    }
}

impl TryFrom<RowSetRepr> for RowSet {
    type Error = String;

    fn try_from(repr: RowSetRepr) -> std::result::Result<Self, Self::Error> {
        let mut index = HashMap::with_capacity(repr.rows.len());
        for (i, row) in repr.rows.iter().enumerate() {
            if index.insert(row.key.clone(), i).is_some() {
                return Err(format!("duplicate key \"{}\" in row set", row.key));
            }
        }
        Ok(Self {
            locales: repr.locales,
            rows: repr.rows,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> RowSet {
        let mut set = RowSet::new(vec!["en".to_string(), "zh".to_string()]);
        set.entry("a")
            .insert_cell("en", Cell::loaded(Some(json!("Hi"))));
        set.entry("b");
        set
    }

    #[test]
    fn test_entry_creates_cell_per_locale() {
        let set = sample();
        let row = set.get("b").unwrap();
        assert_eq!(row.cells().count(), 2);
        assert_eq!(row.value("en"), None);
        assert_eq!(row.value("zh"), None);
    }

    #[test]
    fn test_entry_keeps_insertion_order() {
        let mut set = sample();
        set.entry("a");
        set.entry("c");
        let keys: Vec<&str> = set.keys().collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_loaded_cell_treats_null_as_unset() {
        let cell = Cell::loaded(Some(Value::Null));
        assert_eq!(cell.value, None);
        assert_eq!(cell.previous, None);
        assert!(!cell.is_changed());
    }

    #[test]
    fn test_set_value_tracks_change() {
        let mut set = sample();
        set.set_value("a", "en", Some(json!("Hello"))).unwrap();

        let row = set.get("a").unwrap();
        assert_eq!(row.value("en"), Some(&json!("Hello")));
        assert_eq!(row.previous_value("en"), Some(&json!("Hi")));

        let changed = set.changed_cells();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].0.key, "a");
        assert_eq!(changed[0].1, "en");
    }

    #[test]
    fn test_set_blank_value_clears_cell() {
        let mut set = sample();
        set.set_value("a", "en", Some(json!(""))).unwrap();
        assert_eq!(set.get("a").unwrap().value("en"), None);
    }

    #[test]
    fn test_set_value_back_to_previous_is_unchanged() {
        let mut set = sample();
        set.set_value("a", "en", Some(json!("Hello"))).unwrap();
        set.set_value("a", "en", Some(json!("Hi"))).unwrap();
        assert!(set.changed_cells().is_empty());
    }

    #[test]
    fn test_set_value_unknown_key_or_locale() {
        let mut set = sample();
        assert!(matches!(
            set.set_value("missing", "en", Some(json!("x"))),
            Err(ArbyError::UnknownKey(_))
        ));
        assert!(matches!(
            set.set_value("a", "fr", Some(json!("x"))),
            Err(ArbyError::UnknownLocale(_))
        ));
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some(&Value::Null)));
        assert!(is_blank(Some(&json!(""))));
        assert!(!is_blank(Some(&json!(" "))));
        assert!(!is_blank(Some(&json!(0))));
        assert!(!is_blank(Some(&json!({}))));
    }

    #[test]
    fn test_serde_rebuilds_index() {
        let set = sample();
        let text = serde_json::to_string(&set).unwrap();
        let restored: RowSet = serde_json::from_str(&text).unwrap();
        assert_eq!(restored, set);
        assert!(restored.contains_key("b"));
    }

    #[test]
    fn test_deserialize_rejects_duplicate_keys() {
        let text = r#"{"locales": ["en"], "rows": [
            {"key": "a", "cells": {}},
            {"key": "a", "cells": {}}
        ]}"#;
        let err = serde_json::from_str::<RowSet>(text).unwrap_err();
        assert!(err.to_string().contains("duplicate key"));
    }
}
