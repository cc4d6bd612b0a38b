//! The custom file type entry store.

use serde::Serialize;

use crate::codec::{self, ENTRY_DIVIDER};
use crate::error::{EntryField, FileTypeError, Result};
use crate::icons::IconCatalog;
use crate::traits::{ConfigBackend, MimeRegistry};
use crate::types::{FileTypeEntry, FileTypes};
use crate::validation::{EntryForm, ValidationIssue, validate_serializable};

/// Configuration key holding the serialized entries.
pub const DEFAULT_CONFIG_KEY: &str = "customfiletypes";

/// What [`EntryStore::submit`] did with a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitAction {
    Added,
    Updated,
}

/// Outcome of [`EntryStore::import`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    pub added: Vec<String>,
    pub skipped: Vec<(String, String)>,
}

/// Custom file types persisted in one configuration value.
///
/// Every operation is a single read-modify-write of that value. There is no
/// locking: two concurrent writers race and the last write wins.
pub struct EntryStore<B, R> {
    backend: B,
    registry: R,
    key: String,
}

impl<B: ConfigBackend, R: MimeRegistry> EntryStore<B, R> {
    pub fn new(backend: B, registry: R) -> Self {
        Self {
            backend,
            registry,
            key: DEFAULT_CONFIG_KEY.to_string(),
        }
    }

    /// Use a different configuration key for the serialized entries.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn load(&self) -> Result<String> {
        let value = self.backend.get(&self.key)?.unwrap_or_default();
        tracing::debug!("Loaded {} bytes from '{}'", value.len(), self.key);
        Ok(value)
    }

    fn save(&self, value: &str) -> Result<()> {
        let value = value.trim_matches(ENTRY_DIVIDER);
        if value.is_empty() {
            self.backend.unset(&self.key)
        } else {
            self.backend.set(&self.key, value)
        }
    }

    /// Split the stored value into lines and find the one keyed by `extension`.
    fn locate(&self, extension: &str) -> Result<(Vec<String>, usize)> {
        let value = self.load()?;
        let lines: Vec<String> = value.split(ENTRY_DIVIDER).map(str::to_string).collect();
        let index = lines
            .iter()
            .position(|line| codec::line_extension(line) == Some(extension))
            .ok_or_else(|| FileTypeError::not_found(extension))?;
        Ok((lines, index))
    }

    /// Append a new entry.
    ///
    /// Rejects input containing divider characters. Uniqueness is not checked
    /// here; use [`EntryStore::validate_unique`] or [`EntryStore::submit`].
    pub fn add(&self, extension: &str, mimetype: &str, icon: &str, description: &str) -> Result<()> {
        validate_serializable(extension, mimetype, icon, description)?;

        let entry = FileTypeEntry::new(extension, mimetype, icon, description);
        let line = codec::encode_entry(&entry);

        let existing = self.load()?;
        let value = if existing.is_empty() {
            line
        } else {
            format!("{}{}{}", existing, ENTRY_DIVIDER, line)
        };
        self.backend.set(&self.key, &value)?;

        tracing::info!("Added file type '{}' ({})", entry.extension, entry.mimetype);
        Ok(())
    }

    /// Remove the entry stored under `extension`.
    ///
    /// The configuration key is removed once no entries remain.
    pub fn delete(&self, extension: &str) -> Result<()> {
        let (mut lines, index) = self.locate(extension)?;
        lines.remove(index);
        self.save(&lines.join(&ENTRY_DIVIDER.to_string()))?;

        tracing::info!("Deleted file type '{}'", extension);
        Ok(())
    }

    /// Replace the entry stored under `old_extension` in place.
    ///
    /// Other entries keep their position and exact stored text.
    pub fn update(
        &self,
        old_extension: &str,
        new_extension: &str,
        mimetype: &str,
        icon: &str,
        description: &str,
    ) -> Result<()> {
        validate_serializable(new_extension, mimetype, icon, description)?;

        let (mut lines, index) = self.locate(old_extension)?;
        let entry = FileTypeEntry::new(new_extension, mimetype, icon, description);
        lines[index] = codec::encode_entry(&entry);
        self.save(&lines.join(&ENTRY_DIVIDER.to_string()))?;

        tracing::info!(
            "Updated file type '{}' -> '{}' ({})",
            old_extension,
            entry.extension,
            entry.mimetype
        );
        Ok(())
    }

    /// Whether `extension` collides with a built-in type.
    ///
    /// `old_extension` is excluded from the check so an entry can keep its own
    /// extension when edited. Other custom entries are not considered.
    pub fn is_invalid(&self, extension: &str, old_extension: Option<&str>) -> bool {
        let extension = extension.trim();
        if old_extension.is_some_and(|old| !old.is_empty() && old == extension) {
            return false;
        }
        self.registry.contains(extension)
    }

    /// Reject an extension used by a built-in type or another custom entry.
    pub fn validate_unique(&self, extension: &str, excluding: Option<&str>) -> Result<()> {
        let extension = extension.trim();
        if excluding.is_some_and(|old| old == extension) {
            return Ok(());
        }

        if self.registry.contains(extension) || self.list()?.contains(extension) {
            return Err(FileTypeError::ExtensionTaken {
                extension: extension.to_string(),
            });
        }
        Ok(())
    }

    /// All custom file types in stored order.
    pub fn list(&self) -> Result<FileTypes> {
        Ok(codec::decode(&self.load()?))
    }

    /// The custom file type stored under `extension`.
    pub fn get(&self, extension: &str) -> Result<FileTypeEntry> {
        self.list()?
            .remove(extension)
            .ok_or_else(|| FileTypeError::not_found(extension))
    }

    /// Description of the first custom type with the given MIME type.
    ///
    /// Returns an empty string when nothing matches or the store cannot be read.
    pub fn describe(&self, mimetype: &str) -> String {
        if mimetype.is_empty() {
            return String::new();
        }

        match self.list() {
            Ok(types) => types
                .into_iter()
                .find(|entry| entry.mimetype == mimetype)
                .map(|entry| entry.description)
                .unwrap_or_default(),
            Err(e) => {
                tracing::warn!("Cannot describe '{}': {}", mimetype, e);
                String::new()
            }
        }
    }

    /// Validate a form and apply it as an add or an update.
    ///
    /// Field checks, divider safety and uniqueness are all applied before
    /// anything is written.
    pub fn submit(&self, form: &EntryForm, icons: Option<&IconCatalog>) -> Result<SubmitAction> {
        let mut issues = form.check_fields(icons);

        let excluding = form.is_edit().then_some(form.old_extension.as_str());
        if !form.extension.trim().is_empty() {
            match self.validate_unique(&form.extension, excluding) {
                Ok(()) => {}
                Err(e @ FileTypeError::ExtensionTaken { .. }) => {
                    issues.push(ValidationIssue::new(EntryField::Extension, e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        if !issues.is_empty() {
            return Err(FileTypeError::Validation { issues });
        }

        if form.is_edit() {
            self.update(
                &form.old_extension,
                &form.extension,
                &form.mimetype,
                &form.icon,
                &form.description,
            )?;
            Ok(SubmitAction::Updated)
        } else {
            self.add(&form.extension, &form.mimetype, &form.icon, &form.description)?;
            Ok(SubmitAction::Added)
        }
    }

    /// The raw serialized value, empty when nothing is stored.
    pub fn export(&self) -> Result<String> {
        self.load()
    }

    /// Add every entry of a serialized value that passes validation.
    pub fn import(&self, value: &str) -> Result<ImportReport> {
        let mut report = ImportReport::default();

        for entry in codec::decode(value) {
            let checked = validate_serializable(
                &entry.extension,
                &entry.mimetype,
                &entry.icon,
                &entry.description,
            )
            .and_then(|_| self.validate_unique(&entry.extension, None));

            match checked {
                Ok(()) => {
                    self.add(&entry.extension, &entry.mimetype, &entry.icon, &entry.description)?;
                    report.added.push(entry.extension);
                }
                Err(e @ (FileTypeError::ExtensionTaken { .. } | FileTypeError::InvalidInput { .. })) => {
                    tracing::warn!("Skipping imported file type '{}': {}", entry.extension, e);
                    report.skipped.push((entry.extension, e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
