//! i18nhelp - keep per-locale translation files in sync
//!
//! i18nhelp manages a folder of locales, each holding a flat `common.json`
//! key/value file. Keys are added and deleted across every locale at once
//! (and copied into mirror folders), values for other languages can be
//! filled in by DeepL, and a source tree can be scanned for keys that are
//! never referenced.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale document engine (sync, search, translation, usage scan)
//! - `error`: Fatal configuration errors
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod utils;
