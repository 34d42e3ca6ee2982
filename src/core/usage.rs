//! Unused-key detection by textual search over a source tree.
//!
//! This is a heuristic. A key only counts as used when a [`KeyMatcher`]
//! finds it in some source file, so keys built at runtime (for example
//! `t(prefix + name)` or `messages[key]`) are reported as unused.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use enum_dispatch::enum_dispatch;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::config::{Config, MatchMode};
use crate::error::ConfigError;

/// Decides whether a file's text references a key.
#[enum_dispatch]
pub trait KeyMatcher {
    fn references(&self, content: &str, key: &str) -> bool;
}

/// Matches `'key'` or `"key"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotedLiteralMatcher;

impl KeyMatcher for QuotedLiteralMatcher {
    fn references(&self, content: &str, key: &str) -> bool {
        content.contains(&format!("'{}'", key)) || content.contains(&format!("\"{}\"", key))
    }
}

/// Matches the key wherever it is not glued to other key characters, which
/// also covers template literals and unquoted references.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

fn is_key_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '.' | '-')
}

impl KeyMatcher for TokenMatcher {
    fn references(&self, content: &str, key: &str) -> bool {
        if key.is_empty() {
            return false;
        }
        content.match_indices(key).any(|(start, _)| {
            let before = content[..start].chars().next_back();
            let after = content[start + key.len()..].chars().next();
            !before.is_some_and(is_key_char) && !after.is_some_and(is_key_char)
        })
    }
}

#[enum_dispatch(KeyMatcher)]
#[derive(Debug, Clone, Copy)]
pub enum Matcher {
    QuotedLiteralMatcher,
    TokenMatcher,
}

impl From<MatchMode> for Matcher {
    fn from(mode: MatchMode) -> Self {
        match mode {
            MatchMode::Quoted => QuotedLiteralMatcher.into(),
            MatchMode::Token => TokenMatcher.into(),
        }
    }
}

/// Keys found in one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHit {
    pub path: PathBuf,
    pub keys: Vec<String>,
}

/// A path the walk could not read.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct UsageReport {
    /// Candidates never matched, in reference document order.
    pub unused: Vec<String>,
    pub hits: Vec<FileHit>,
    pub files_scanned: usize,
    pub warnings: Vec<ScanWarning>,
    /// True when the walk ended because every key had been found.
    pub stopped_early: bool,
}

/// Walks a source tree looking for references to translation keys.
#[derive(Debug, Clone)]
pub struct UsageScanner<M: KeyMatcher = Matcher> {
    matcher: M,
    ignored_folders: Vec<String>,
    ignores: Vec<Pattern>,
    extensions: Vec<String>,
}

impl UsageScanner<Matcher> {
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let ignores = config
            .ignores
            .iter()
            .map(|pattern| {
                Pattern::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            matcher: config.match_mode.into(),
            ignored_folders: config.ignored_folders.clone(),
            ignores,
            extensions: config.source_extensions.clone(),
        })
    }
}

impl<M: KeyMatcher> UsageScanner<M> {
    pub fn new(matcher: M, ignored_folders: &[&str], extensions: &[&str]) -> Self {
        Self {
            matcher,
            ignored_folders: ignored_folders.iter().map(|s| s.to_string()).collect(),
            ignores: Vec::new(),
            extensions: extensions.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn is_ignored(&self, entry: &DirEntry, root: &Path) -> bool {
        if entry.depth() == 0 {
            return false;
        }
        if entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.ignored_folders.iter().any(|f| f == name))
        {
            return true;
        }
        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        self.ignores
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
    }

    fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|x| x == ext))
    }

    /// Walk `root` depth-first and return the keys no source file references.
    ///
    /// Found keys leave the candidate set immediately, and the walk stops
    /// as soon as the set is empty.
    pub fn find_unused<I>(&self, keys: I, root: &Path) -> Result<UsageReport>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        if !root.is_dir() {
            bail!("Directory '{}' does not exist.", root.display());
        }

        let mut report = UsageReport::default();
        let mut candidates: Vec<String> = keys.into_iter().map(Into::into).collect();
        if candidates.is_empty() {
            report.stopped_early = true;
            return Ok(report);
        }

        let walker = WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_ignored(entry, root));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    report.warnings.push(ScanWarning {
                        path: e
                            .path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_default(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            let path = entry.path();
            if !entry.file_type().is_file() || !self.is_source_file(path) {
                continue;
            }

            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) => {
                    report.warnings.push(ScanWarning {
                        path: path.display().to_string(),
                        error: e.to_string(),
                    });
                    continue;
                }
            };
            report.files_scanned += 1;

            let mut found = Vec::new();
            candidates.retain(|key| {
                if self.matcher.references(&content, key) {
                    found.push(key.clone());
                    false
                } else {
                    true
                }
            });
            if !found.is_empty() {
                report.hits.push(FileHit {
                    path: path.to_path_buf(),
                    keys: found,
                });
            }

            if candidates.is_empty() {
                report.stopped_early = true;
                break;
            }
        }

        report.unused = candidates;
        Ok(report)
    }
}
