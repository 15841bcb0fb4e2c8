//! The session stored between commands.
//!
//! `arby fetch` writes the freshly merged table here, `arby set` edits it in
//! place, and `arby status` / `arby push` read it back.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};

use crate::core::Session;

pub const SESSION_FILE_NAME: &str = "session.json";

pub struct Worktable {
    file_path: PathBuf,
}

impl Worktable {
    pub fn new(work_dir: &Path) -> Self {
        Self {
            file_path: work_dir.join(SESSION_FILE_NAME),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn exists(&self) -> bool {
        self.file_path.exists()
    }

    pub fn load(&self) -> Result<Session> {
        if !self.exists() {
            bail!(
                "No fetched translations at {} (run `arby fetch` first)",
                self.file_path.display()
            );
        }
        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read file: {}", self.file_path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse session: {}", self.file_path.display()))
    }

    /// Save the session with 2-space indentation and a trailing newline,
    /// replacing whatever was stored before.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(session).context("Failed to serialize session")?;

        fs::write(&self.file_path, format!("{}\n", content))
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }
}
