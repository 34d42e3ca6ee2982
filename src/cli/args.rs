//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `setup`: write the i18nHelper.config.json configuration file
//! - `find`: search keys and values of one locale document
//! - `add`: add a key to every locale (translated when a DeepL key is set)
//! - `delete`: delete a key from every locale, optionally picking from search results
//! - `unused`: list keys that no source file seems to reference

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::core::SearchIn;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Find(cmd)) => cmd.common.verbose,
            Some(Command::Add(cmd)) => cmd.common.verbose,
            Some(Command::Delete(cmd)) => cmd.common.verbose,
            Some(Command::Unused(cmd)) => cmd.common.verbose,
            Some(Command::Setup(_)) | None => false,
        }
    }
}

/// Common arguments shared by commands that read the configuration.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct SetupCommand {
    /// Folder holding one sub-folder per locale
    pub target_folder: String,

    /// Additional folders that receive a copy of every locale file
    pub additional_folders: Vec<String>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    /// The word to search (case-insensitive)
    pub any_word: String,

    /// Where to search
    #[arg(value_enum, default_value_t = SearchIn::Both)]
    pub search_in: SearchIn,

    /// The locale to search in (defaults to the default locale)
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// An explicit value for one locale, given as `locale=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleValue {
    pub locale: String,
    pub value: String,
}

fn parse_locale_value(raw: &str) -> Result<LocaleValue, String> {
    let (locale, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected LOCALE=VALUE, got \"{}\"", raw))?;
    let locale = locale.trim();
    if locale.is_empty() {
        return Err(format!("missing locale in \"{}\"", raw));
    }
    Ok(LocaleValue {
        locale: locale.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Args)]
pub struct AddCommand {
    /// Key of the entry to add
    pub key: String,

    /// Value of the entry, translated for every locale without an explicit value
    pub value: String,

    /// Explicit value for one locale (e.g. tr=merhaba); repeatable
    #[arg(short, long = "locale", value_name = "LOCALE=VALUE", value_parser = parse_locale_value)]
    pub locales: Vec<LocaleValue>,

    /// Overwrite the key where it already exists
    #[arg(short, long)]
    pub overwrite: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Key to delete (exact match), or the word to search with --selective
    pub key: String,

    /// Choose the keys to delete from all partial matches
    #[arg(short, long)]
    pub selective: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct UnusedCommand {
    /// The directory to search in (defaults to the current directory)
    pub dir: Option<PathBuf>,

    /// Locale whose keys are checked (defaults to the default locale)
    #[arg(short, long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the i18nHelper.config.json configuration file
    Setup(SetupCommand),
    /// Search for a word in the keys and values of a locale file
    Find(FindCommand),
    /// Add a new key=value entry to all locale files
    Add(AddCommand),
    /// Delete a key from all locale files
    Delete(DeleteCommand),
    /// Find keys that are not referenced in source files
    Unused(UnusedCommand),
}
