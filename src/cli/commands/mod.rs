pub mod add;
pub mod delete;
pub mod find;
mod command_result;
pub mod setup;
pub mod unused;

use std::env;

use anyhow::{Context, Result};

pub use command_result::*;
use crate::config::{LoadedConfig, load_config};
use crate::core::LocaleSync;

/// Load the configuration from the working directory and open the locale set.
pub(crate) fn load_sync() -> Result<(LoadedConfig, LocaleSync)> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let loaded = load_config(&cwd)?;
    let sync = LocaleSync::from_config(&loaded)?;
    Ok((loaded, sync))
}
