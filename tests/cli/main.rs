use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use anyhow::{Context, Ok, Result};
use arby::{
    core::{LocaleColumn, LocaleDocument, Session, merge::merge},
    worktable::Worktable,
};
use insta_cmd::get_cargo_bin;
use tempfile::TempDir;

mod edit;
mod fetch;
mod init;
mod push;

const BIN_NAME: &str = "arby";

pub struct CliTest {
    _temp_dir: TempDir,
    project_dir: PathBuf,
}

impl CliTest {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_dir = temp_dir.path().canonicalize()?;
        // Stops the upward config search at the project root.
        fs::create_dir(project_dir.join(".git"))?;
        Ok(Self {
            _temp_dir: temp_dir,
            project_dir,
        })
    }

    /// A project with an already fetched session built from `(path, content)` pairs.
    pub fn with_session(files: &[(&str, &str)]) -> Result<Self> {
        let test = Self::new()?;
        let mut columns = Vec::new();
        let mut documents = Vec::new();
        for (path, content) in files {
            let column = LocaleColumn::from_path(*path)?;
            documents.push(LocaleDocument::parse(column.locale.clone(), content)?);
            columns.push(column);
        }
        let session = Session {
            columns,
            rows: merge(&documents)?,
        };
        Worktable::new(&test.project_dir.join(".arby")).save(&session)?;
        Ok(test)
    }

    pub fn write_file(&self, path: &str, content: &str) -> Result<()> {
        let file_path = self.project_dir.join(path);

        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory:{}", parent.display()))?;
        }

        fs::write(&file_path, content)
            .with_context(|| format!("Failed to write file: {}", file_path.display()))?;

        Ok(())
    }

    pub fn root(&self) -> &Path {
        &self.project_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(get_cargo_bin(BIN_NAME));
        cmd.current_dir(&self.project_dir);
        cmd.env_clear();
        cmd.env("NO_COLOR", "1"); // Disable colors for consistent test output
        cmd
    }

    pub fn read_file(&self, path: &str) -> Result<String> {
        let file_path = self.project_dir.join(path);
        fs::read_to_string(&file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))
    }

    pub fn session(&self) -> Result<Session> {
        Worktable::new(&self.project_dir.join(".arby")).load()
    }
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
