//! Replication of locale documents into mirror roots.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::document::DOCUMENT_FILE_NAME;

/// Writes a copy of each saved document into every additional root.
#[derive(Debug, Clone, Default)]
pub struct MirrorWriter {
    roots: Vec<PathBuf>,
}

impl MirrorWriter {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Write `content` to `<root>/<locale>/common.json` for every root,
    /// creating the locale folder when needed. Returns the number of copies.
    pub fn replicate(&self, locale: &str, content: &str) -> Result<usize> {
        for root in &self.roots {
            let folder = root.join(locale);
            fs::create_dir_all(&folder)
                .with_context(|| format!("Failed to create directory: {}", folder.display()))?;

            let path = folder.join(DOCUMENT_FILE_NAME);
            fs::write(&path, content)
                .with_context(|| format!("Failed to write file: {}", path.display()))?;
        }
        Ok(self.roots.len())
    }
}
