use anyhow::Result;

use super::{
    CommandResult, CommandSummary, StatusSummary,
    helper::{CommandContext, collect_changes, collect_orphans},
};
use crate::cli::args::StatusCommand;

pub fn status(_cmd: StatusCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new()?;
    let session = ctx.worktable.load()?;

    Ok(CommandResult::ok(CommandSummary::Status(StatusSummary {
        key_count: session.rows.len(),
        changes: collect_changes(&session),
        orphan_annotations: collect_orphans(&session),
    })))
}
