use anyhow::Result;
use tracing::info;

use super::{
    CommandResult, CommandSummary, PushSummary,
    helper::{CommandContext, block_on, collect_changes, collect_orphans},
};
use crate::{
    cli::args::PushCommand,
    core::{ReconciliationEngine, render},
    gitlab::GitLabClient,
};

/// Render every locale file from the stored table; with `--apply`, commit them together.
///
/// The stored table is never modified here, so a rejected commit can simply be retried.
pub fn push(cmd: PushCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new()?;
    let session = ctx.worktable.load()?;

    let change_count = collect_changes(&session).len();
    let orphan_annotations = collect_orphans(&session);

    let (files, commit) = if cmd.apply {
        let mut config = cmd.session.session_config(&ctx.config.config);
        // Write back to the files the table was fetched from.
        config.file_paths = session
            .columns
            .iter()
            .map(|c| c.file_path.clone())
            .collect();
        config.validate()?;

        let message = cmd
            .message
            .unwrap_or_else(|| ctx.config.config.commit_message.clone());
        info!(branch = %config.branch, changes = change_count, "pushing");

        let engine = ReconciliationEngine::new(GitLabClient::new(&config)?);
        let persisted = block_on(engine.persist(&session, &message))??;
        (persisted.files, Some(persisted.commit))
    } else {
        (render(&session), None)
    };

    Ok(CommandResult::ok(CommandSummary::Push(PushSummary {
        is_apply: cmd.apply,
        change_count,
        files,
        orphan_annotations,
        commit,
    })))
}
