//! Reconciliation engine: ARB files in, one editable table, ARB files out.
//!
//! Data flows leaves first:
//!
//! 1. `key_kind`: classify keys as meta (`@@x`), annotation (`@x`) or plain
//! 2. `merge`: union per-locale documents into a [`RowSet`]
//! 3. `order`: canonical write order (meta first, annotations after their key)
//! 4. `serialize`: render one locale's file from ordered rows
//! 5. `engine`: fetch, merge, render and commit through a [`FileStore`]

pub mod engine;
pub mod key_kind;
pub mod locale;
pub mod merge;
pub mod order;
pub mod row;
pub mod serialize;
pub mod session;

pub use engine::{
    CommitSummary, FileStore, FileUpdate, LoadResult, LoadWarning, PersistResult,
    ReconciliationEngine, render,
};
pub use key_kind::KeyKind;
pub use locale::{LocaleColumn, LocaleDocument, locale_id_from_path};
pub use row::{Cell, Row, RowSet};
pub use session::{DEFAULT_COMMIT_MESSAGE, Session, SessionConfig};
