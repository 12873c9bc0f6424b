//! Where deck files come from.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;

use super::{parse_deck, LoadError};
use crate::cards::Card;

/// Supplies parsed card lists by file name.
pub trait DeckSource {
    /// Fetch and parse one deck file.
    fn fetch(&self, file: &str) -> Result<Vec<Card>, LoadError>;
}

/// Reads deck files from a directory on disk.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Serve files under `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl DeckSource for DirectorySource {
    fn fetch(&self, file: &str) -> Result<Vec<Card>, LoadError> {
        let path = self.root.join(file);
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LoadError::NotFound(file.to_string()));
            }
            Err(source) => return Err(LoadError::Io { path, source }),
        };
        parse_deck(file, &text)
    }
}

/// Serves deck files from memory.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: FxHashMap<String, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (builder pattern).
    #[must_use]
    pub fn with_file(mut self, file: impl Into<String>, contents: impl Into<String>) -> Self {
        self.insert(file, contents);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, file: impl Into<String>, contents: impl Into<String>) {
        self.files.insert(file.into(), contents.into());
    }
}

impl DeckSource for MemorySource {
    fn fetch(&self, file: &str) -> Result<Vec<Card>, LoadError> {
        let text = self
            .files
            .get(file)
            .ok_or_else(|| LoadError::NotFound(file.to_string()))?;
        parse_deck(file, text)
    }
}
