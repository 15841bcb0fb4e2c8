use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_COMMIT_MESSAGE, SessionConfig};

pub const CONFIG_FILE_NAME: &str = ".arbyrc.json";

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub gitlab_endpoint: String,
    #[serde(default)]
    pub project_id: String,
    /// Prefer `ARBY_PRIVATE_TOKEN` over storing the token here.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub private_token: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub file_paths: Vec<String>,
    #[serde(default = "default_commit_message")]
    pub commit_message: String,
    #[serde(default = "default_work_dir")]
    pub work_dir: String,
}

fn default_commit_message() -> String {
    DEFAULT_COMMIT_MESSAGE.to_string()
}

fn default_work_dir() -> String {
    ".arby".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gitlab_endpoint: "https://gitlab.com".to_string(),
            project_id: String::new(),
            private_token: String::new(),
            branch: "main".to_string(),
            file_paths: Vec::new(),
            commit_message: default_commit_message(),
            work_dir: default_work_dir(),
        }
    }
}

impl Config {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            gitlab_endpoint: self.gitlab_endpoint.trim().to_string(),
            project_id: self.project_id.trim().to_string(),
            private_token: self.private_token.trim().to_string(),
            branch: self.branch.trim().to_string(),
            file_paths: normalize_file_paths(&self.file_paths),
        }
    }
}

/// Split comma-separated entries, trim them and drop empty ones.
///
/// `["a.arb, b.arb", " "]` becomes `["a.arb", "b.arb"]`.
pub fn normalize_file_paths<S: AsRef<str>>(paths: &[S]) -> Vec<String> {
    paths
        .iter()
        .flat_map(|p| p.as_ref().split(','))
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory the config file was found in, or the start directory when using defaults.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    /// Directory holding the stored session.
    pub fn work_dir(&self) -> PathBuf {
        self.root.join(&self.config.work_dir)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
