use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, add::add, delete::delete, find::find, setup::setup, unused::unused},
};

/// Dispatch the parsed command to its handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and the exit status
/// - `Err` if the command fails (e.g., config not found, write errors)
pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Setup(cmd)) => setup(cmd),
        Some(Command::Find(cmd)) => find(cmd),
        Some(Command::Add(cmd)) => add(cmd),
        Some(Command::Delete(cmd)) => delete(cmd),
        Some(Command::Unused(cmd)) => unused(cmd),
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
