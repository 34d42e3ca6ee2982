//! Choosing search results for selective delete.

use std::{
    collections::HashSet,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result};

use super::search::SearchMatch;

/// Supplies the raw index list picked by the user.
pub trait IndexSelector {
    fn select(&mut self, matches: &[SearchMatch]) -> Result<String>;
}

/// Prompts on stdout and reads one line from stdin.
#[derive(Debug, Default)]
pub struct StdinSelector;

impl IndexSelector for StdinSelector {
    fn select(&mut self, _matches: &[SearchMatch]) -> Result<String> {
        println!("Enter the key's numbers to delete separated by comma (,) :");
        io::stdout().flush().ok();

        let mut line = String::new();
        io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read selection from stdin")?;
        Ok(line)
    }
}

/// Fixed answer, for non-interactive callers.
#[derive(Debug, Clone)]
pub struct FixedSelector(pub String);

impl IndexSelector for FixedSelector {
    fn select(&mut self, _matches: &[SearchMatch]) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// Keys picked from a selection, plus the entries that did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub keys: Vec<String>,
    pub rejected: Vec<String>,
}

/// Resolve a comma-separated list of 1-based indices against `matches`.
///
/// Blank entries are dropped silently. Non-numeric, zero and out-of-range
/// entries are rejected; repeated indices resolve once.
pub fn resolve_selection(input: &str, matches: &[SearchMatch]) -> Selection {
    let mut selection = Selection::default();
    let mut seen = HashSet::new();

    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let resolved = part
            .parse::<usize>()
            .ok()
            .and_then(|n| matches.iter().find(|m| m.index == n));
        match resolved {
            Some(m) => {
                if seen.insert(m.index) {
                    selection.keys.push(m.key.clone());
                }
            }
            None => selection.rejected.push(part.to_string()),
        }
    }
    selection
}
