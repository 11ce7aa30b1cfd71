//! In-memory file store for one extraction run
//!
//! The calling environment supplies the whole bundle of input files up front,
//! keyed by name. Referenced file names inside the bundle rarely match the
//! stored names exactly (absolute paths from another machine, relative paths
//! against a directory layout that was flattened on upload), so resolution
//! falls back from exact match to basename matching.

use tracing::debug;

/// In-memory store of uploaded file contents, keyed by file name
///
/// Insertion order is preserved: main-file selection takes the first stored
/// entry with the main-file extension. Re-adding an exact name replaces the
/// content in place, keeping the original position. The store is read-only
/// once extraction begins.
#[derive(Debug, Clone, Default)]
pub struct FileStore {
    /// (name, content) pairs in insertion order
    files: Vec<(String, String)>,
}

impl FileStore {
    /// Create a new empty file store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store populated from an iterator of (name, content) pairs
    pub fn from_files<I, N, C>(files: I) -> Self
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut store = Self::new();
        for (name, content) in files {
            store.add_file(name, content);
        }
        store
    }

    /// Add a file to the store; an existing exact name is replaced in place
    pub fn add_file(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();
        if let Some(entry) = self.files.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = content;
        } else {
            self.files.push((name, content));
        }
    }

    /// Resolve a requested path to stored content
    ///
    /// Tried in order: exact key match, the requested name's basename against
    /// stored keys, the requested name's basename against each stored key's
    /// basename. First match wins; no match returns None. Never panics.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        // Exact match first
        if let Some((_, content)) = self.files.iter().find(|(n, _)| n == name) {
            return Some(content);
        }

        // Basename against stored keys
        let basename = Self::basename(name);
        if let Some((stored, content)) = self.files.iter().find(|(n, _)| n == basename) {
            debug!("Resolved '{}' to stored file '{}'", name, stored);
            return Some(content);
        }

        // Basename against each stored key's basename
        if let Some((stored, content)) = self
            .files
            .iter()
            .find(|(n, _)| Self::basename(n) == basename)
        {
            debug!("Resolved '{}' to stored file '{}'", name, stored);
            return Some(content);
        }

        None
    }

    /// Iterate over (name, content) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }

    /// Number of stored files
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Final path segment of a name, splitting on both separator styles
    fn basename(name: &str) -> &str {
        name.rsplit(['/', '\\']).next().unwrap_or(name)
    }
}
