//! Add, delete and find across every locale folder.
//!
//! Mutations are applied locale by locale and each document is written (and
//! mirrored) as soon as it changes. Nothing is rolled back: if a write fails
//! partway, locales handled before it keep their new content.

use std::{collections::HashMap, fs};

use anyhow::{Context, Result, bail};

use crate::config::LoadedConfig;
use crate::error::ConfigError;

use super::{
    document::LocaleDocument,
    document_set::{LocaleDocumentSet, LocaleSkip},
    mirror::MirrorWriter,
    search::{self, SearchIn, SearchMatch},
    selection::{IndexSelector, Selection, resolve_selection},
    translate::{TranslationProvider, TranslationStatus},
};

/// Where the value written for a locale came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Override,
    Translated,
    Literal,
}

#[derive(Debug, Clone, Default)]
pub struct AddRequest {
    pub key: String,
    pub value: String,
    /// Explicit values per locale folder name.
    pub overrides: HashMap<String, String>,
    pub overwrite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Added {
        locale: String,
        value: String,
        source: ValueSource,
        /// Previous value when an existing key was overwritten.
        replaced: Option<String>,
        mirrors: usize,
        /// Why translation fell back to the literal value, if it did.
        warning: Option<String>,
    },
    AlreadyExists {
        locale: String,
        current: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted {
        locale: String,
        keys: Vec<String>,
        mirrors: usize,
    },
    NotFound {
        locale: String,
    },
}

/// Per-locale results of one mutation, plus the locales left out.
#[derive(Debug, Clone)]
pub struct SyncReport<T> {
    pub outcomes: Vec<T>,
    pub skipped: Vec<LocaleSkip>,
}

#[derive(Debug, Clone)]
pub struct FindResult {
    pub locale: String,
    pub query: String,
    pub search_in: SearchIn,
    pub matches: Vec<SearchMatch>,
}

#[derive(Debug, Clone)]
pub struct SelectiveDelete {
    pub found: FindResult,
    pub selection: Selection,
    /// `None` when nothing was selected and no document was touched.
    pub deleted: Option<SyncReport<DeleteOutcome>>,
}

/// The synchronization engine over one target root and its mirrors.
#[derive(Debug, Clone)]
pub struct LocaleSync {
    documents: LocaleDocumentSet,
    mirrors: MirrorWriter,
    sort_keys: bool,
}

impl LocaleSync {
    pub fn new(documents: LocaleDocumentSet, mirrors: MirrorWriter, sort_keys: bool) -> Self {
        Self {
            documents,
            mirrors,
            sort_keys,
        }
    }

    pub fn from_config(loaded: &LoadedConfig) -> Result<Self, ConfigError> {
        let documents = LocaleDocumentSet::open(
            &loaded.target_root(),
            loaded.config.default_locale.as_deref(),
        )?;
        Ok(Self::new(
            documents,
            MirrorWriter::new(loaded.mirror_roots()),
            loaded.config.sort_item_by_name,
        ))
    }

    pub fn documents(&self) -> &LocaleDocumentSet {
        &self.documents
    }

    pub fn mirrors(&self) -> &MirrorWriter {
        &self.mirrors
    }

    /// Write `document` to its own path and to every mirror root.
    ///
    /// Returns the number of mirror copies written.
    fn save(&self, document: &LocaleDocument) -> Result<usize> {
        let content = document.to_json(self.sort_keys)?;
        fs::write(document.path(), &content)
            .with_context(|| format!("Failed to write file: {}", document.path().display()))?;
        self.mirrors.replicate(document.locale(), &content)
    }

    /// Add `request.key` to every locale document.
    ///
    /// Translations are requested one locale at a time.
    pub async fn add(
        &self,
        request: &AddRequest,
        translator: &dyn TranslationProvider,
    ) -> Result<SyncReport<AddOutcome>> {
        if request.key.is_empty() {
            bail!("Key must not be empty.");
        }

        let loaded = self.documents.load_all()?;
        let mut outcomes = Vec::with_capacity(loaded.documents.len());

        for mut document in loaded.documents {
            let locale = document.locale().to_string();

            if !request.overwrite
                && let Some(current) = document.get(&request.key)
            {
                outcomes.push(AddOutcome::AlreadyExists {
                    current: current.to_string(),
                    locale,
                });
                continue;
            }

            let (value, source, warning) = match request.overrides.get(&locale) {
                Some(value) => (value.clone(), ValueSource::Override, None),
                None => {
                    let translation = translator.translate(&request.value, &locale).await;
                    match translation.status {
                        TranslationStatus::Translated => {
                            (translation.text, ValueSource::Translated, None)
                        }
                        TranslationStatus::Disabled => {
                            (translation.text, ValueSource::Literal, None)
                        }
                        TranslationStatus::Failed(reason) => {
                            (translation.text, ValueSource::Literal, Some(reason))
                        }
                    }
                }
            };

            let replaced = document.set(&request.key, &value);
            let mirrors = self.save(&document)?;
            outcomes.push(AddOutcome::Added {
                locale,
                value,
                source,
                replaced,
                mirrors,
                warning,
            });
        }

        Ok(SyncReport {
            outcomes,
            skipped: loaded.skipped,
        })
    }

    /// Remove each of `keys` (exact match) from every locale document.
    pub fn delete(&self, keys: &[String]) -> Result<SyncReport<DeleteOutcome>> {
        let loaded = self.documents.load_all()?;
        let mut outcomes = Vec::with_capacity(loaded.documents.len());

        for mut document in loaded.documents {
            let locale = document.locale().to_string();
            let mut deleted = Vec::new();
            for key in keys {
                if document.remove(key).is_some() {
                    deleted.push(key.clone());
                }
            }

            if deleted.is_empty() {
                outcomes.push(DeleteOutcome::NotFound { locale });
                continue;
            }

            let mirrors = self.save(&document)?;
            outcomes.push(DeleteOutcome::Deleted {
                locale,
                keys: deleted,
                mirrors,
            });
        }

        Ok(SyncReport {
            outcomes,
            skipped: loaded.skipped,
        })
    }

    /// Override locales that name no locale folder, sorted.
    pub fn unknown_overrides(&self, request: &AddRequest) -> Vec<String> {
        let locales = self.documents.locales();
        let mut unknown: Vec<String> = request
            .overrides
            .keys()
            .filter(|locale| !locales.contains(*locale))
            .cloned()
            .collect();
        unknown.sort();
        unknown
    }

    /// Search one document; `None` selects the default locale.
    pub fn find(
        &self,
        query: &str,
        search_in: SearchIn,
        locale: Option<&str>,
    ) -> Result<FindResult> {
        let document = self.documents.get_document(locale)?;
        let matches = search::find(&document, query, search_in)?;
        Ok(FindResult {
            locale: document.locale().to_string(),
            query: query.to_string(),
            search_in,
            matches,
        })
    }

    /// Search the default locale for `query`, let `selector` pick results by
    /// index, then delete the picked keys from every locale.
    pub fn delete_selected(
        &self,
        query: &str,
        selector: &mut dyn IndexSelector,
    ) -> Result<SelectiveDelete> {
        let found = self.find(query, SearchIn::Both, None)?;
        if found.matches.is_empty() {
            return Ok(SelectiveDelete {
                found,
                selection: Selection::default(),
                deleted: None,
            });
        }

        let input = selector.select(&found.matches)?;
        let selection = resolve_selection(&input, &found.matches);
        let deleted = if selection.keys.is_empty() {
            None
        } else {
            Some(self.delete(&selection.keys)?)
        };

        Ok(SelectiveDelete {
            found,
            selection,
            deleted,
        })
    }
}
