//! Report formatting and printing utilities.
//!
//! Separate from command logic so commands can be used and tested as a library.

use std::io::{self, Write};

use colored::Colorize;
use serde_json::Value;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CellChange, CommandResult, CommandSummary, FetchSummary, InitSummary, PushSummary, SetSummary,
    StatusSummary,
};
use crate::config::CONFIG_FILE_NAME;
use crate::core::{FileUpdate, key_kind::annotation_base};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Shown in place of a value that is not set.
const UNSET: &str = "(unset)";

/// Print a command result: results to stdout, warnings and errors to stderr.
pub fn print(result: &CommandResult, verbose: bool) {
    print_to(
        result,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Print a command result to custom writers.
pub fn print_to<O: Write, E: Write>(result: &CommandResult, verbose: bool, out: &mut O, err: &mut E) {
    match &result.summary {
        CommandSummary::Init(summary) => print_init(summary, out, err),
        CommandSummary::Fetch(summary) => print_fetch(summary, verbose, out, err),
        CommandSummary::Set(summary) => print_set(summary, out),
        CommandSummary::Status(summary) => print_status(summary, out, err),
        CommandSummary::Push(summary) => print_push(summary, verbose, out, err),
    }
}

fn print_init<O: Write, E: Write>(summary: &InitSummary, out: &mut O, err: &mut E) {
    if summary.created {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    } else {
        let _ = writeln!(
            err,
            "{} {} already exists",
            "error:".bold().red(),
            CONFIG_FILE_NAME
        );
    }
}

fn print_fetch<O: Write, E: Write>(summary: &FetchSummary, verbose: bool, out: &mut O, err: &mut E) {
    for warning in &summary.warnings {
        let _ = writeln!(
            err,
            "{} {} was loaded as empty: {}",
            "warning:".bold().yellow(),
            warning.file_path.cyan(),
            warning.error
        );
    }

    let file_count = summary.columns.len();
    let _ = writeln!(
        out,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Fetched {} {} from {} locale {}",
            summary.key_count,
            plural(summary.key_count, "key", "keys"),
            file_count,
            plural(file_count, "file", "files")
        )
        .green()
    );

    if verbose {
        let width = summary
            .columns
            .iter()
            .map(|c| c.locale.width())
            .max()
            .unwrap_or(0);
        for column in &summary.columns {
            let _ = writeln!(
                out,
                "  {}{}  {}",
                column.locale.bold(),
                pad(&column.locale, width),
                column.file_path.dimmed()
            );
        }
        let _ = writeln!(
            out,
            "  {} {}",
            "stored in".dimmed(),
            summary.session_path.display()
        );
    }
}

fn print_set<O: Write>(summary: &SetSummary, out: &mut O) {
    let _ = writeln!(
        out,
        "{} {} [{}]: {} -> {}",
        SUCCESS_MARK.green(),
        summary.key.bold(),
        summary.column.locale,
        display_value(summary.previous.as_ref()).dimmed(),
        display_value(summary.value.as_ref()).green()
    );
}

fn print_status<O: Write, E: Write>(summary: &StatusSummary, out: &mut O, err: &mut E) {
    print_orphans(&summary.orphan_annotations, err);

    if summary.changes.is_empty() {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "No edits ({} {})",
                summary.key_count,
                plural(summary.key_count, "key", "keys")
            )
            .green()
        );
        return;
    }

    let count = summary.changes.len();
    let _ = writeln!(
        out,
        "{} edited {}:",
        count,
        plural(count, "cell", "cells")
    );
    print_changes(&summary.changes, out);
}

fn print_push<O: Write, E: Write>(summary: &PushSummary, verbose: bool, out: &mut O, err: &mut E) {
    print_orphans(&summary.orphan_annotations, err);

    for file in &summary.files {
        let _ = writeln!(
            out,
            "  {} ({} {})",
            file.file_path.cyan(),
            written_keys(file),
            plural(written_keys(file), "key", "keys")
        );
        if verbose {
            for line in file.content.lines() {
                let _ = writeln!(out, "    {}", line.dimmed());
            }
        }
    }

    let file_count = summary.files.len();
    match &summary.commit {
        Some(commit) => {
            let _ = writeln!(
                out,
                "{} {}",
                SUCCESS_MARK.green(),
                format!(
                    "Committed {} {} in {}",
                    file_count,
                    plural(file_count, "file", "files"),
                    commit.id
                )
                .green()
            );
            if let Some(url) = &commit.web_url {
                let _ = writeln!(out, "  {}", url.cyan());
            }
        }
        None => {
            let _ = writeln!(
                out,
                "Dry run: {} {} with {} edited {} would be committed (use {} to commit)",
                file_count,
                plural(file_count, "file", "files"),
                summary.change_count,
                plural(summary.change_count, "cell", "cells"),
                "--apply".cyan()
            );
        }
    }
}

fn print_changes<O: Write>(changes: &[CellChange], out: &mut O) {
    let key_width = changes.iter().map(|c| c.key.width()).max().unwrap_or(0);
    let locale_width = changes
        .iter()
        .map(|c| c.column.locale.width())
        .max()
        .unwrap_or(0);

    for change in changes {
        let _ = writeln!(
            out,
            "  {}{}  {}{}  {} -> {}",
            change.key.bold(),
            pad(&change.key, key_width),
            change.column.locale,
            pad(&change.column.locale, locale_width),
            display_value(change.previous.as_ref()).red(),
            display_value(change.value.as_ref()).green()
        );
    }
}

fn print_orphans<E: Write>(orphans: &[String], err: &mut E) {
    for key in orphans {
        let base = annotation_base(key).unwrap_or_default();
        let _ = writeln!(
            err,
            "{} \"{}\" has no key \"{}\" and will not be written",
            "warning:".bold().yellow(),
            key,
            base
        );
    }
}

/// Number of `"key": value` lines in a rendered file.
fn written_keys(file: &FileUpdate) -> usize {
    file.content.lines().count().saturating_sub(2)
}

fn display_value(value: Option<&Value>) -> String {
    match value {
        None => UNSET.to_string(),
        Some(value) => value.to_string(),
    }
}

/// Spaces needed to align `text` to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.width()))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
