use std::collections::HashSet;

use super::{
    locale::LocaleDocument,
    row::{Cell, RowSet},
};
use crate::error::{ArbyError, Result};

/// Merge locale documents into one row per distinct key.
///
/// Row order is the order in which keys are first seen, walking the documents
/// in the given order. Every row gets a cell for every document's locale; a key
/// missing from a document leaves that cell unset. Current and previous values
/// start out equal.
///
/// Fails only if two documents carry the same locale identifier.
pub fn merge(documents: &[LocaleDocument]) -> Result<RowSet> {
    let mut seen = HashSet::new();
    for doc in documents {
        if !seen.insert(doc.locale.as_str()) {
            return Err(ArbyError::DuplicateLocale(doc.locale.clone()));
        }
    }

    let locales = documents.iter().map(|doc| doc.locale.clone()).collect();
    let mut rows = RowSet::new(locales);

    for doc in documents {
        for (key, value) in &doc.entries {
            rows.entry(key)
                .insert_cell(doc.locale.clone(), Cell::loaded(Some(value.clone())));
        }
    }

    Ok(rows)
}
