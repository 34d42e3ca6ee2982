use anyhow::Result;

use super::super::args::FindCommand;
use super::{CommandResult, CommandSummary, load_sync};

pub fn find(cmd: FindCommand) -> Result<CommandResult> {
    let (_, sync) = load_sync()?;
    let result = sync.find(&cmd.any_word, cmd.search_in, cmd.locale.as_deref())?;
    Ok(CommandResult::success(CommandSummary::Find(result)))
}
