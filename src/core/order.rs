//! Canonical write order for ARB rows.
//!
//! Meta rows (`@@locale`, ...) come first, in table order. Every plain row
//! follows in table order, each trailed by its annotation (`@key`) when one
//! exists. An annotation whose plain key is gone has nothing to follow and is
//! left out of the output; [`orphan_annotations`] reports those keys.

use super::{
    key_kind::{KeyKind, annotation_base, annotation_key},
    row::{Row, RowSet},
};

pub fn order(rows: &RowSet) -> Vec<&Row> {
    let mut ordered = Vec::with_capacity(rows.len());

    ordered.extend(rows.iter().filter(|row| row.kind() == KeyKind::Meta));

    for row in rows.iter().filter(|row| row.kind() == KeyKind::Plain) {
        ordered.push(row);
        if let Some(annotation) = rows.get(&annotation_key(&row.key)) {
            ordered.push(annotation);
        }
    }

    ordered
}

/// Annotation keys that [`order`] drops because their plain key is not in the table.
pub fn orphan_annotations(rows: &RowSet) -> Vec<&str> {
    rows.iter()
        .filter_map(|row| {
            let base = annotation_base(&row.key)?;
            (!rows.contains_key(base)).then_some(row.key.as_str())
        })
        .collect()
}
