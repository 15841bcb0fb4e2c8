use std::path::PathBuf;

use serde_json::Value;

use crate::core::{CommitSummary, FileUpdate, LoadWarning, LocaleColumn};

#[derive(Debug)]
pub enum CommandSummary {
    Init(InitSummary),
    Fetch(FetchSummary),
    Set(SetSummary),
    Status(StatusSummary),
    Push(PushSummary),
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

#[derive(Debug)]
pub struct FetchSummary {
    pub key_count: usize,
    pub columns: Vec<LocaleColumn>,
    pub warnings: Vec<LoadWarning>,
    pub session_path: PathBuf,
}

#[derive(Debug)]
pub struct SetSummary {
    pub key: String,
    pub column: LocaleColumn,
    pub previous: Option<Value>,
    pub value: Option<Value>,
}

/// A cell whose value differs from the fetched one.
#[derive(Debug, Clone, PartialEq)]
pub struct CellChange {
    pub key: String,
    pub column: LocaleColumn,
    pub previous: Option<Value>,
    pub value: Option<Value>,
}

#[derive(Debug)]
pub struct StatusSummary {
    pub key_count: usize,
    pub changes: Vec<CellChange>,
    /// Annotation keys with no plain key; a push leaves them out.
    pub orphan_annotations: Vec<String>,
}

#[derive(Debug)]
pub struct PushSummary {
    pub is_apply: bool,
    pub change_count: usize,
    pub files: Vec<FileUpdate>,
    pub orphan_annotations: Vec<String>,
    /// Set once the commit went through.
    pub commit: Option<CommitSummary>,
}

/// Result of running arby commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}

impl CommandResult {
    pub fn ok(summary: CommandSummary) -> Self {
        Self {
            summary,
            error_count: 0,
            exit_on_errors: true,
        }
    }
}
