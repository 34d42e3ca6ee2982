use std::path::PathBuf;

use super::super::exit_status::ExitStatus;
use crate::core::{
    AddOutcome, DeleteOutcome, FindResult, SelectiveDelete, SyncReport, UsageReport,
};

#[derive(Debug)]
pub enum CommandSummary {
    Setup(SetupSummary),
    Find(FindResult),
    Add(AddSummary),
    Delete(DeleteSummary),
    Unused(UnusedSummary),
}

#[derive(Debug)]
pub struct SetupSummary {
    pub path: PathBuf,
    /// False when the file already existed and was left alone.
    pub created: bool,
    pub overwritten: bool,
}

#[derive(Debug)]
pub struct AddSummary {
    pub key: String,
    pub report: SyncReport<AddOutcome>,
    /// `--locale` overrides naming no locale folder.
    pub unknown_locales: Vec<String>,
}

#[derive(Debug)]
pub enum DeleteSummary {
    Exact(SyncReport<DeleteOutcome>),
    /// Matches were already shown while prompting.
    Selective(SelectiveDelete),
}

#[derive(Debug)]
pub struct UnusedSummary {
    pub locale: String,
    pub dir: PathBuf,
    pub report: UsageReport,
}

/// Result of running an i18nhelp command.
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
    pub status: ExitStatus,
}

impl CommandResult {
    pub fn success(summary: CommandSummary) -> Self {
        Self {
            summary,
            status: ExitStatus::Success,
        }
    }
}
