//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create a `.arbyrc.json` configuration file
//! - `fetch`: Load every locale file into the local table
//! - `set`: Edit one cell of the table
//! - `status`: Show edited cells and annotations that will be dropped
//! - `push`: Preview or commit the edited files

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{Config, normalize_file_paths};
use crate::core::SessionConfig;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Fetch(cmd)) => cmd.common.verbose,
            Some(Command::Set(cmd)) => cmd.common.verbose,
            Some(Command::Status(cmd)) => cmd.common.verbose,
            Some(Command::Push(cmd)) => cmd.common.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Repository parameters (override the config file).
#[derive(Debug, Clone, Default, Args)]
pub struct SessionArgs {
    /// GitLab base URL, e.g. https://gitlab.com
    #[arg(long, env = "ARBY_GITLAB_ENDPOINT")]
    pub gitlab_endpoint: Option<String>,

    /// Numeric project ID or namespaced path (group/project)
    #[arg(long, env = "ARBY_PROJECT_ID")]
    pub project_id: Option<String>,

    /// Personal or project access token with api scope
    #[arg(long, env = "ARBY_PRIVATE_TOKEN", hide_env_values = true)]
    pub private_token: Option<String>,

    /// Branch to read from and commit to
    #[arg(long, env = "ARBY_BRANCH")]
    pub branch: Option<String>,

    /// Comma-separated locale file paths in the repository
    #[arg(long, env = "ARBY_FILE_PATHS", value_delimiter = ',')]
    pub file_paths: Vec<String>,
}

impl SessionArgs {
    /// Combine with the config file; command-line values win.
    pub fn session_config(&self, config: &Config) -> SessionConfig {
        let mut session = config.session_config();
        let overrides = [
            (&mut session.gitlab_endpoint, &self.gitlab_endpoint),
            (&mut session.project_id, &self.project_id),
            (&mut session.private_token, &self.private_token),
            (&mut session.branch, &self.branch),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value.trim().to_string();
            }
        }
        let file_paths = normalize_file_paths(&self.file_paths);
        if !file_paths.is_empty() {
            session.file_paths = file_paths;
        }
        session
    }
}

#[derive(Debug, Args)]
pub struct FetchCommand {
    #[command(flatten)]
    pub session: SessionArgs,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct SetCommand {
    /// Translation key (e.g. `title`, `@title`, `@@locale`)
    pub key: String,
    /// Locale identifier or original file path of the column
    pub locale: String,
    /// New value; an empty string clears the cell
    pub value: String,
    /// Parse the value as JSON (always done for `@annotation` keys)
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct StatusCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PushCommand {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Actually commit the files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Commit message (overrides config file)
    #[arg(short, long)]
    pub message: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .arbyrc.json configuration file
    Init,
    /// Fetch every locale file and merge them into one editable table
    Fetch(FetchCommand),
    /// Change the value of one key in one locale
    Set(SetCommand),
    /// Show edited cells and annotations without a key
    Status(StatusCommand),
    /// Render every locale file and commit them together
    Push(PushCommand),
}
