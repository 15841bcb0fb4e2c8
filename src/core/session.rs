use serde::{Deserialize, Serialize};

use super::{locale::LocaleColumn, row::RowSet};
use crate::error::{ArbyError, Result};

/// Commit message used when none is configured.
pub const DEFAULT_COMMIT_MESSAGE: &str = "update arb files";

/// Everything needed to reach the repository holding the locale files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionConfig {
    pub gitlab_endpoint: String,
    pub project_id: String,
    pub private_token: String,
    pub branch: String,
    pub file_paths: Vec<String>,
}

impl SessionConfig {
    /// Check that every parameter needed to talk to the repository is present.
    pub fn validate(&self) -> Result<()> {
        if self.private_token.trim().is_empty() {
            return Err(ArbyError::MissingParameter("Private token"));
        }
        if self.project_id.trim().is_empty() {
            return Err(ArbyError::MissingParameter("Project ID"));
        }
        if self.gitlab_endpoint.trim().is_empty() {
            return Err(ArbyError::MissingParameter("GitLab endpoint"));
        }
        if self.branch.trim().is_empty() {
            return Err(ArbyError::MissingParameter("Branch"));
        }
        if self.file_paths.is_empty() {
            return Err(ArbyError::MissingParameter("File paths"));
        }
        Ok(())
    }
}

/// The editable table together with the files its columns came from.
///
/// Owned by the caller; the engine only borrows it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Session {
    pub columns: Vec<LocaleColumn>,
    pub rows: RowSet,
}

impl Session {
    /// Find a column by locale identifier or by its original file path.
    pub fn column(&self, locale_or_path: &str) -> Option<&LocaleColumn> {
        self.columns
            .iter()
            .find(|c| c.locale == locale_or_path)
            .or_else(|| self.columns.iter().find(|c| c.file_path == locale_or_path))
    }
}
