use std::{env, future::Future, path::PathBuf};

use anyhow::{Context, Result};

use super::CellChange;
use crate::{
    config::{ConfigLoadResult, load_config},
    core::{Session, order::orphan_annotations},
    worktable::Worktable,
};

/// Configuration and stored table for the current directory.
pub struct CommandContext {
    pub config: ConfigLoadResult,
    pub worktable: Worktable,
}

impl CommandContext {
    pub fn new() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read current directory")?;
        Self::from_dir(cwd)
    }

    pub fn from_dir(dir: PathBuf) -> Result<Self> {
        let config = load_config(&dir)?;
        let worktable = Worktable::new(&config.work_dir());
        Ok(Self { config, worktable })
    }
}

/// Drive a future to completion on a single-threaded runtime.
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    Ok(runtime.block_on(future))
}

/// Every edited cell, in table order.
pub fn collect_changes(session: &Session) -> Vec<CellChange> {
    session
        .rows
        .changed_cells()
        .into_iter()
        .filter_map(|(row, locale, cell)| {
            let column = session.columns.iter().find(|c| c.locale == locale)?;
            Some(CellChange {
                key: row.key.clone(),
                column: column.clone(),
                previous: cell.previous.clone(),
                value: cell.value.clone(),
            })
        })
        .collect()
}

pub fn collect_orphans(session: &Session) -> Vec<String> {
    orphan_annotations(&session.rows)
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LocaleColumn, LocaleDocument, merge::merge};
    use serde_json::json;

    fn session() -> Session {
        let en = LocaleDocument::parse("enarb", r#"{"a": "A", "@x": {}}"#).unwrap();
        let de = LocaleDocument::parse("dearb", r#"{"a": "Ä"}"#).unwrap();
        Session {
            columns: vec![
                LocaleColumn::from_path("en.arb").unwrap(),
                LocaleColumn::from_path("de.arb").unwrap(),
            ],
            rows: merge(&[en, de]).unwrap(),
        }
    }

    #[test]
    fn test_collect_changes() {
        let mut session = session();
        session
            .rows
            .set_value("a", "dearb", Some(json!("A2")))
            .unwrap();

        let changes = collect_changes(&session);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].key, "a");
        assert_eq!(changes[0].column.file_path, "de.arb");
        assert_eq!(changes[0].previous, Some(json!("Ä")));
        assert_eq!(changes[0].value, Some(json!("A2")));
    }

    #[test]
    fn test_collect_orphans() {
        assert_eq!(collect_orphans(&session()), vec!["@x"]);
    }

    #[test]
    fn test_block_on() {
        assert_eq!(block_on(async { 1 + 1 }).unwrap(), 2);
    }
}
