//! Enumeration of locale folders under the target root.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ConfigError;

use super::document::{DOCUMENT_FILE_NAME, LoadError, LocaleDocument};

/// A locale that was left out of the current operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSkip {
    pub locale: String,
    pub path: PathBuf,
    pub reason: LoadError,
}

impl LocaleSkip {
    pub fn is_missing(&self) -> bool {
        self.reason == LoadError::Missing
    }
}

/// Result of loading every locale document.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub documents: Vec<LocaleDocument>,
    pub skipped: Vec<LocaleSkip>,
}

/// The locale folders found under the target root.
///
/// The folder list is captured once when the set is opened and is sorted,
/// so the default locale does not depend on directory listing order.
#[derive(Debug, Clone)]
pub struct LocaleDocumentSet {
    root: PathBuf,
    locales: Vec<String>,
    default_locale: Option<String>,
}

impl LocaleDocumentSet {
    pub fn open(root: &Path, default_locale: Option<&str>) -> Result<Self, ConfigError> {
        if !root.is_dir() {
            return Err(ConfigError::TargetMissing {
                path: root.to_path_buf(),
            });
        }

        let entries = fs::read_dir(root).map_err(|_| ConfigError::TargetMissing {
            path: root.to_path_buf(),
        })?;

        let mut locales: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect();
        locales.sort();

        if let Some(locale) = default_locale
            && !locales.iter().any(|l| l == locale)
        {
            return Err(ConfigError::UnknownLocale {
                locale: locale.to_string(),
                root: root.to_path_buf(),
            });
        }

        Ok(Self {
            root: root.to_path_buf(),
            locales,
            default_locale: default_locale.map(String::from),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn locales(&self) -> &[String] {
        &self.locales
    }

    pub fn document_path(&self, locale: &str) -> PathBuf {
        self.root.join(locale).join(DOCUMENT_FILE_NAME)
    }

    /// The configured default locale, or the first folder in sorted order.
    pub fn default_locale(&self) -> Result<&str, ConfigError> {
        if let Some(locale) = &self.default_locale {
            return Ok(locale);
        }
        self.locales
            .first()
            .map(String::as_str)
            .ok_or_else(|| ConfigError::NoLocales {
                root: self.root.clone(),
            })
    }

    /// `locale` if it is one of the enumerated folders.
    fn known_locale<'a>(&self, locale: &'a str) -> Result<&'a str, ConfigError> {
        if self.locales.iter().any(|l| l == locale) {
            Ok(locale)
        } else {
            Err(ConfigError::UnknownLocale {
                locale: locale.to_string(),
                root: self.root.clone(),
            })
        }
    }

    /// Load one document; `None` selects the default locale.
    ///
    /// Unlike [`Self::load_all`], a missing or corrupt document is fatal here.
    pub fn get_document(&self, locale: Option<&str>) -> Result<LocaleDocument, ConfigError> {
        let locale = match locale {
            Some(locale) => self.known_locale(locale)?,
            None => self.default_locale()?,
        };
        let path = self.document_path(locale);
        LocaleDocument::load(locale, &path).map_err(|reason| match reason {
            LoadError::Missing => ConfigError::MissingDocument {
                locale: locale.to_string(),
                path,
            },
            LoadError::Unreadable(reason) => ConfigError::InvalidDocument { path, reason },
        })
    }

    /// Load every locale document, setting aside the ones that cannot be read.
    pub fn load_all(&self) -> Result<LoadedDocuments, ConfigError> {
        if self.locales.is_empty() {
            return Err(ConfigError::NoLocales {
                root: self.root.clone(),
            });
        }

        let mut loaded = LoadedDocuments::default();
        for locale in &self.locales {
            let path = self.document_path(locale);
            match LocaleDocument::load(locale, &path) {
                Ok(document) => loaded.documents.push(document),
                Err(reason) => loaded.skipped.push(LocaleSkip {
                    locale: locale.clone(),
                    path,
                    reason,
                }),
            }
        }
        Ok(loaded)
    }
}
