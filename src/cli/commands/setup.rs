use std::{env, fs};

use anyhow::{Context, Result};

use super::super::{args::SetupCommand, exit_status::ExitStatus};
use super::{CommandResult, CommandSummary, SetupSummary};
use crate::config::{CONFIG_FILE_NAME, setup_config_json};

pub fn setup(cmd: SetupCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    let path = cwd.join(CONFIG_FILE_NAME);
    let exists = path.exists();

    if exists && !cmd.force {
        return Ok(CommandResult {
            summary: CommandSummary::Setup(SetupSummary {
                path,
                created: false,
                overwritten: false,
            }),
            status: ExitStatus::Failure,
        });
    }

    let content = setup_config_json(&cmd.target_folder, &cmd.additional_folders)?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    Ok(CommandResult::success(CommandSummary::Setup(SetupSummary {
        path,
        created: true,
        overwritten: exists,
    })))
}
