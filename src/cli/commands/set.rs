use anyhow::{Context, Result, anyhow};
use serde_json::Value;

use super::{CommandResult, CommandSummary, SetSummary, helper::CommandContext};
use crate::{
    cli::args::SetCommand,
    core::{KeyKind, Session},
};

pub fn set(cmd: SetCommand) -> Result<CommandResult> {
    let ctx = CommandContext::new()?;
    let mut session = ctx.worktable.load()?;

    let summary = apply_edit(&mut session, &cmd.key, &cmd.locale, &cmd.value, cmd.json)?;
    ctx.worktable.save(&session)?;

    Ok(CommandResult::ok(CommandSummary::Set(summary)))
}

/// Write one cell. Annotation values (and any value with `as_json`) are parsed as JSON.
pub fn apply_edit(
    session: &mut Session,
    key: &str,
    locale_or_path: &str,
    raw_value: &str,
    as_json: bool,
) -> Result<SetSummary> {
    let column = session.column(locale_or_path).cloned().ok_or_else(|| {
        let known: Vec<&str> = session.columns.iter().map(|c| c.locale.as_str()).collect();
        anyhow!(
            "Unknown locale \"{}\" (known: {})",
            locale_or_path,
            known.join(", ")
        )
    })?;

    let value = parse_value(key, raw_value, as_json)?;
    let previous = session
        .rows
        .get(key)
        .and_then(|row| row.previous_value(&column.locale))
        .cloned();

    session.rows.set_value(key, &column.locale, value)?;
    let value = session
        .rows
        .get(key)
        .and_then(|row| row.value(&column.locale))
        .cloned();

    Ok(SetSummary {
        key: key.to_string(),
        column,
        previous,
        value,
    })
}

fn parse_value(key: &str, raw: &str, as_json: bool) -> Result<Option<Value>> {
    if raw.is_empty() {
        return Ok(None);
    }
    if as_json || KeyKind::classify(key) == KeyKind::Annotation {
        let value = serde_json::from_str(raw)
            .with_context(|| format!("Value for \"{}\" must be valid JSON", key))?;
        return Ok(Some(value));
    }
    Ok(Some(Value::String(raw.to_string())))
}
