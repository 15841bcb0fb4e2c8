use anyhow::Result;
use tracing::debug;

use super::{
    CommandResult, CommandSummary, FetchSummary,
    helper::{CommandContext, block_on},
};
use crate::{cli::args::FetchCommand, core::ReconciliationEngine, gitlab::GitLabClient};

/// Load every configured locale file and replace the stored table with the merge.
pub fn fetch(cmd: FetchCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new()?;
    let config = cmd.session.session_config(&ctx.config.config);
    // Report missing parameters before building a client.
    config.validate()?;

    let engine = ReconciliationEngine::new(GitLabClient::new(&config)?);
    let loaded = block_on(engine.load(&config))??;

    ctx.worktable.save(&loaded.session)?;
    debug!(path = %ctx.worktable.path().display(), "session stored");

    Ok(CommandResult::ok(CommandSummary::Fetch(FetchSummary {
        key_count: loaded.session.rows.len(),
        columns: loaded.session.columns,
        warnings: loaded.warnings,
        session_path: ctx.worktable.path().to_path_buf(),
    })))
}
