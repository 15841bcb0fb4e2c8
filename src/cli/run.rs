/// Dispatches to the appropriate command handler based on the parsed arguments.
///
/// # Returns
/// - `Ok(CommandResult)` with the command summary and exit behavior
/// - `Err` if the command fails (e.g. missing parameters, no fetched session, commit rejected)
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{
        CommandResult, fetch::fetch, init::init, push::push, set::set, status::status,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Fetch(cmd)) => fetch(cmd),
        Some(Command::Set(cmd)) => set(cmd),
        Some(Command::Status(cmd)) => status(cmd),
        Some(Command::Push(cmd)) => push(cmd),
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
