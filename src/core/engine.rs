//! Load/persist cycle over a remote file store.
//!
//! Loading fetches every locale file at once and only merges after all of
//! them have settled. A file that cannot be fetched or parsed becomes an empty
//! document and a [`LoadWarning`]. Persisting orders the rows once, renders
//! every locale, and hands all files to the store in a single commit.

use futures::future::join_all;
use tracing::{debug, info, warn};

use super::{
    locale::{LocaleColumn, LocaleDocument, columns_from_paths},
    merge::merge,
    order::order,
    serialize::serialize,
    session::{Session, SessionConfig},
};
use crate::error::Result;

/// New content for one file in a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpdate {
    pub file_path: String,
    pub content: String,
}

/// What the store reports back after a successful commit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitSummary {
    pub id: String,
    pub web_url: Option<String>,
}

/// Remote storage for locale files.
#[allow(async_fn_in_trait)]
pub trait FileStore {
    /// Fetch the decoded text of a file, or `None` if it could not be read.
    async fn fetch_file(&self, file_path: &str) -> Option<String>;

    /// Write every update in one commit.
    async fn commit_files(&self, message: &str, updates: &[FileUpdate]) -> Result<CommitSummary>;
}

/// A locale file that was loaded as empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub error: String,
}

/// Files written by [`ReconciliationEngine::persist`] and the commit holding them.
#[derive(Debug)]
pub struct PersistResult {
    pub files: Vec<FileUpdate>,
    pub commit: CommitSummary,
}

#[derive(Debug)]
pub struct LoadResult {
    pub session: Session,
    pub warnings: Vec<LoadWarning>,
}

pub struct ReconciliationEngine<S> {
    store: S,
}

impl<S: FileStore> ReconciliationEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch every configured file and merge them into a fresh session.
    ///
    /// Configuration problems are reported before anything is fetched.
    pub async fn load(&self, config: &SessionConfig) -> Result<LoadResult> {
        config.validate()?;
        let columns = columns_from_paths(&config.file_paths)?;

        let fetches = columns.iter().map(|column| async move {
            debug!(file_path = %column.file_path, "fetching locale file");
            (column, self.store.fetch_file(&column.file_path).await)
        });
        let fetched = join_all(fetches).await;

        let mut warnings = Vec::new();
        let documents: Vec<LocaleDocument> = fetched
            .into_iter()
            .map(|(column, content)| match read_document(column, content.as_deref()) {
                Ok(doc) => doc,
                Err(warning) => {
                    warn!(
                        file_path = %warning.file_path,
                        error = %warning.error,
                        "loading locale file as empty"
                    );
                    warnings.push(warning);
                    LocaleDocument::empty(&column.locale)
                }
            })
            .collect();

        let rows = merge(&documents)?;
        info!(
            keys = rows.len(),
            locales = columns.len(),
            degraded = warnings.len(),
            "loaded locale files"
        );

        Ok(LoadResult {
            session: Session { columns, rows },
            warnings,
        })
    }

    /// Commit the rendered files of every column in one go.
    ///
    /// The session is only read, so a failed commit can be retried as is.
    pub async fn persist(&self, session: &Session, message: &str) -> Result<PersistResult> {
        let files = render(session);
        info!(files = files.len(), "committing locale files");
        let commit = self.store.commit_files(message, &files).await?;
        info!(commit = %commit.id, "commit created");
        Ok(PersistResult { files, commit })
    }
}

/// Render the file content of every column, in column order.
pub fn render(session: &Session) -> Vec<FileUpdate> {
    let ordered = order(&session.rows);
    session
        .columns
        .iter()
        .map(|column| FileUpdate {
            file_path: column.file_path.clone(),
            content: serialize(&ordered, &column.locale),
        })
        .collect()
}

fn read_document(
    column: &LocaleColumn,
    content: Option<&str>,
) -> std::result::Result<LocaleDocument, LoadWarning> {
    let warning = |error: String| LoadWarning {
        file_path: column.file_path.clone(),
        error,
    };
    let content = content.ok_or_else(|| warning("file could not be fetched".to_string()))?;
    LocaleDocument::parse(&column.locale, content).map_err(|e| warning(e.to_string()))
}
