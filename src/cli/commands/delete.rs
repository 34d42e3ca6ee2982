use anyhow::Result;

use super::super::{args::DeleteCommand, report};
use super::{CommandResult, CommandSummary, DeleteSummary, load_sync};
use crate::core::{IndexSelector, SearchMatch, StdinSelector};

/// Shows the numbered matches, then asks on stdin which ones to delete.
struct PromptSelector;

impl IndexSelector for PromptSelector {
    fn select(&mut self, matches: &[SearchMatch]) -> Result<String> {
        report::print_matches(matches);
        StdinSelector.select(matches)
    }
}

pub fn delete(cmd: DeleteCommand) -> Result<CommandResult> {
    let (_, sync) = load_sync()?;

    let summary = if cmd.selective {
        DeleteSummary::Selective(sync.delete_selected(&cmd.key, &mut PromptSelector)?)
    } else {
        DeleteSummary::Exact(sync.delete(&[cmd.key])?)
    };

    Ok(CommandResult::success(CommandSummary::Delete(summary)))
}
