//! Case-insensitive substring search over one locale document.

use std::ops::Range;

use anyhow::{Context, Result};
use clap::ValueEnum;
use regex::{Regex, RegexBuilder};

use super::document::LocaleDocument;

/// Which side of an entry a query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SearchIn {
    Key,
    Value,
    #[default]
    Both,
}

impl SearchIn {
    pub fn keys(self) -> bool {
        matches!(self, SearchIn::Key | SearchIn::Both)
    }

    pub fn values(self) -> bool {
        matches!(self, SearchIn::Value | SearchIn::Both)
    }
}

/// One search hit.
///
/// `index` is 1-based and is the handle used by selective delete. The
/// highlight ranges are byte ranges into `key` and `value`; a side that was
/// not searched has no ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub index: usize,
    pub key: String,
    pub value: String,
    pub key_highlights: Vec<Range<usize>>,
    pub value_highlights: Vec<Range<usize>>,
}

/// A compiled query.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pattern: Regex,
    search_in: SearchIn,
}

impl SearchQuery {
    pub fn new(query: &str, search_in: SearchIn) -> Result<Self> {
        let pattern = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Query is too long: \"{}\"", query))?;
        Ok(Self { pattern, search_in })
    }

    pub fn search_in(&self) -> SearchIn {
        self.search_in
    }

    fn highlights(&self, text: &str) -> Vec<Range<usize>> {
        self.pattern
            .find_iter(text)
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect()
    }

    /// Scan `document` in order and number the hits from 1.
    pub fn run(&self, document: &LocaleDocument) -> Vec<SearchMatch> {
        document
            .iter()
            .filter(|(key, value)| {
                (self.search_in.keys() && self.pattern.is_match(key))
                    || (self.search_in.values() && self.pattern.is_match(value))
            })
            .enumerate()
            .map(|(i, (key, value))| SearchMatch {
                index: i + 1,
                key: key.to_string(),
                value: value.to_string(),
                key_highlights: if self.search_in.keys() {
                    self.highlights(key)
                } else {
                    Vec::new()
                },
                value_highlights: if self.search_in.values() {
                    self.highlights(value)
                } else {
                    Vec::new()
                },
            })
            .collect()
    }
}

/// Run a one-off query against `document`.
pub fn find(
    document: &LocaleDocument,
    query: &str,
    search_in: SearchIn,
) -> Result<Vec<SearchMatch>> {
    Ok(SearchQuery::new(query, search_in)?.run(document))
}
