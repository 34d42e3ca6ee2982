//! A single `common.json` locale document.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::utils::collation_key;

/// File name of the locale document inside every locale folder.
pub const DOCUMENT_FILE_NAME: &str = "common.json";

/// Why a locale document could not be loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The locale folder has no `common.json`.
    Missing,
    /// The file exists but cannot be read or is not a flat string map.
    Unreadable(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Missing => write!(f, "no {} file", DOCUMENT_FILE_NAME),
            LoadError::Unreadable(reason) => write!(f, "{}", reason),
        }
    }
}

/// Ordered key/value translations for one locale, backed by one JSON file.
///
/// Entry order is the file order (serde_json `preserve_order`), so search
/// results and unsorted writes keep the author's layout.
#[derive(Debug, Clone)]
pub struct LocaleDocument {
    locale: String,
    path: PathBuf,
    entries: Map<String, Value>,
}

impl LocaleDocument {
    pub fn new(locale: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            locale: locale.into(),
            path: path.into(),
            entries: Map::new(),
        }
    }

    pub fn load(locale: &str, path: &Path) -> Result<Self, LoadError> {
        if !path.is_file() {
            return Err(LoadError::Missing);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| LoadError::Unreadable(format!("failed to read: {}", e)))?;
        Self::parse(locale, path, &content)
    }

    /// Parse document text. The root must be an object of string values.
    pub fn parse(locale: &str, path: &Path, content: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(content)
            .map_err(|e| LoadError::Unreadable(format!("invalid JSON: {}", e)))?;
        let Value::Object(entries) = value else {
            return Err(LoadError::Unreadable(
                "root of JSON file must be an object".to_string(),
            ));
        };
        if let Some((key, _)) = entries.iter().find(|(_, v)| !v.is_string()) {
            return Err(LoadError::Unreadable(format!(
                "value of \"{}\" is not a string",
                key
            )));
        }
        Ok(Self {
            locale: locale.to_string(),
            path: path.to_path_buf(),
            entries,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(Value::as_str)
    }

    /// Insert or replace `key`. Returns the previous value if there was one.
    pub fn set(&mut self, key: &str, value: &str) -> Option<String> {
        self.entries
            .insert(key.to_string(), Value::String(value.to_string()))
            .and_then(|old| old.as_str().map(String::from))
    }

    /// Remove `key` on exact match, keeping the order of the other entries.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries
            .shift_remove(key)
            .and_then(|old| old.as_str().map(String::from))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str().unwrap_or_default()))
    }

    /// Serialize as pretty JSON (2-space indentation, trailing newline).
    ///
    /// With `sort_keys`, entries are ordered by [`collation_key`] first, so
    /// the output only depends on the content, never on insertion order.
    pub fn to_json(&self, sort_keys: bool) -> Result<String> {
        let content = if sort_keys {
            let mut sorted: Vec<(&String, &Value)> = self.entries.iter().collect();
            sorted.sort_by_cached_key(|(k, _)| collation_key(k));
            let map: Map<String, Value> = sorted
                .into_iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            serde_json::to_string_pretty(&Value::Object(map))
        } else {
            serde_json::to_string_pretty(&self.entries)
        }
        .context("Failed to serialize JSON")?;
        Ok(format!("{}\n", content))
    }
}
