use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = "i18nHelper.config.json";

/// Environment variable consulted when the config carries no DeepL key.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Key must appear as `'key'` or `"key"`.
    #[default]
    Quoted,
    /// Key must appear delimited by characters that cannot belong to a key.
    Token,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default)]
    pub target_folder: String,
    #[serde(default)]
    pub additional_folders: Vec<String>,
    #[serde(default = "default_sort_item_by_name")]
    pub sort_item_by_name: bool,
    #[serde(default, rename = "deepL_ApiKey")]
    pub deepl_api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default = "default_ignored_folders")]
    pub ignored_folders: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default)]
    pub match_mode: MatchMode,
}

fn default_sort_item_by_name() -> bool {
    true
}

fn default_ignored_folders() -> Vec<String> {
    ["node_modules", "dist", "build", "coverage"]
        .map(String::from)
        .to_vec()
}

fn default_source_extensions() -> Vec<String> {
    ["tsx", "jsx", "ts", "js"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_folder: String::new(),
            additional_folders: Vec::new(),
            sort_item_by_name: default_sort_item_by_name(),
            deepl_api_key: String::new(),
            default_locale: None,
            ignored_folders: default_ignored_folders(),
            ignores: Vec::new(),
            source_extensions: default_source_extensions(),
            match_mode: MatchMode::default(),
        }
    }
}

impl Config {
    /// Config written by `setup`.
    pub fn for_setup(target_folder: &str, additional_folders: &[String]) -> Self {
        Self {
            target_folder: target_folder.to_string(),
            additional_folders: additional_folders.to_vec(),
            ..Default::default()
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if the target folder is unset or any glob pattern in
    /// `ignores` is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_folder.trim().is_empty() {
            return Err(ConfigError::TargetUnset);
        }
        for pattern in &self.ignores {
            Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
        }
        Ok(())
    }

    /// The DeepL credential, falling back to the environment when the file
    /// carries none. `None` means translation is disabled.
    pub fn api_key(&self) -> Option<String> {
        let key = self.deepl_api_key.trim();
        if !key.is_empty() {
            return Some(key.to_string());
        }
        env::var(API_KEY_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

pub fn setup_config_json(target_folder: &str, additional_folders: &[String]) -> Result<String> {
    let config = Config::for_setup(target_folder, additional_folders);
    serde_json::to_string_pretty(&config).context("Failed to generate config.")
}

/// Configuration together with the directory it was loaded from.
///
/// Relative folder paths in the file are resolved against `base_dir`.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub base_dir: PathBuf,
}

impl LoadedConfig {
    pub fn target_root(&self) -> PathBuf {
        self.resolve(&self.config.target_folder)
    }

    pub fn mirror_roots(&self) -> Vec<PathBuf> {
        self.config
            .additional_folders
            .iter()
            .map(|folder| self.resolve(folder))
            .collect()
    }

    fn resolve(&self, folder: &str) -> PathBuf {
        let path = Path::new(folder);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

pub fn load_config(dir: &Path) -> Result<LoadedConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Err(ConfigError::NotFound {
            dir: dir.to_path_buf(),
        });
    }

    let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    let config: Config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;
    config.validate()?;

    Ok(LoadedConfig {
        config,
        base_dir: dir.to_path_buf(),
    })
}
