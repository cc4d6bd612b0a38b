//! Data types for custom file type entries.

use serde::{Deserialize, Serialize};

/// A single custom file type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeEntry {
    /// File name extension without the dot, e.g. `mobi`.
    pub extension: String,
    /// MIME type associated with the extension.
    pub mimetype: String,
    /// Icon base name without size suffix or image extension, e.g. `document`.
    pub icon: String,
    /// Human readable label. May contain the attribute divider.
    pub description: String,
}

impl FileTypeEntry {
    /// Create an entry the way it is written to the store.
    ///
    /// The extension, MIME type and description are trimmed of surrounding
    /// whitespace. The icon is kept as given.
    pub fn new(extension: &str, mimetype: &str, icon: &str, description: &str) -> Self {
        Self {
            extension: extension.trim().to_string(),
            mimetype: mimetype.trim().to_string(),
            icon: icon.to_string(),
            description: description.trim().to_string(),
        }
    }
}

/// Custom file types keyed by extension, in stored order.
///
/// Inserting an extension that is already present replaces the value but
/// keeps the original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FileTypes {
    entries: Vec<FileTypeEntry>,
}

impl FileTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the value it replaced if the extension existed.
    pub fn insert(&mut self, entry: FileTypeEntry) -> Option<FileTypeEntry> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.extension == entry.extension)
        {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn get(&self, extension: &str) -> Option<&FileTypeEntry> {
        self.entries.iter().find(|e| e.extension == extension)
    }

    pub fn contains(&self, extension: &str) -> bool {
        self.get(extension).is_some()
    }

    pub fn remove(&mut self, extension: &str) -> Option<FileTypeEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.extension == extension)?;
        Some(self.entries.remove(index))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.extension.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileTypeEntry> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<FileTypeEntry> {
        self.entries
    }
}

impl IntoIterator for FileTypes {
    type Item = FileTypeEntry;
    type IntoIter = std::vec::IntoIter<FileTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FileTypes {
    type Item = &'a FileTypeEntry;
    type IntoIter = std::slice::Iter<'a, FileTypeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<FileTypeEntry> for FileTypes {
    fn from_iter<I: IntoIterator<Item = FileTypeEntry>>(iter: I) -> Self {
        let mut types = FileTypes::new();
        for entry in iter {
            types.insert(entry);
        }
        types
    }
}
