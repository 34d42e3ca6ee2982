use std::env;

use anyhow::{Context, Result};

use super::super::args::UnusedCommand;
use super::{CommandResult, CommandSummary, UnusedSummary, load_sync};
use crate::core::UsageScanner;

pub fn unused(cmd: UnusedCommand) -> Result<CommandResult> {
    let (loaded, sync) = load_sync()?;
    let document = sync.documents().get_document(cmd.locale.as_deref())?;
    let scanner = UsageScanner::from_config(&loaded.config)?;

    let dir = match cmd.dir {
        Some(dir) => dir,
        None => env::current_dir().context("Failed to get current directory")?,
    };
    let report = scanner.find_unused(document.keys(), &dir)?;

    Ok(CommandResult::success(CommandSummary::Unused(UnusedSummary {
        locale: document.locale().to_string(),
        dir,
        report,
    })))
}
