use anyhow::{Context, Result};

use super::super::args::AddCommand;
use super::{AddSummary, CommandResult, CommandSummary, load_sync};
use crate::core::{AddRequest, translate::provider_for};

pub fn add(cmd: AddCommand) -> Result<CommandResult> {
    let (loaded, sync) = load_sync()?;
    let translator = provider_for(loaded.config.api_key())?;

    // Later `--locale` flags for the same locale win.
    let request = AddRequest {
        key: cmd.key,
        value: cmd.value,
        overrides: cmd
            .locales
            .into_iter()
            .map(|lv| (lv.locale, lv.value))
            .collect(),
        overwrite: cmd.overwrite,
    };

    let unknown_locales = sync.unknown_overrides(&request);

    let report = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?
        .block_on(sync.add(&request, translator.as_ref()))?;

    Ok(CommandResult::success(CommandSummary::Add(AddSummary {
        key: request.key,
        report,
        unknown_locales,
    })))
}
