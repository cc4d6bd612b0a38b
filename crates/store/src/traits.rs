//! Trait definitions for the collaborators of the entry store.

use crate::error::Result;
use crate::reference::MimeDescriptor;

/// Generic key-value configuration storage.
///
/// The entry store reads and writes exactly one key through this interface.
/// Each call is a complete operation; implementations hold no state between
/// calls that the store relies on.
pub trait ConfigBackend: Send + Sync {
    /// Read a value. Absent keys return `None`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn unset(&self, key: &str) -> Result<()>;
}

impl<T: ConfigBackend + ?Sized> ConfigBackend for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn unset(&self, key: &str) -> Result<()> {
        (**self).unset(key)
    }
}

impl<T: ConfigBackend + ?Sized> ConfigBackend for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn unset(&self, key: &str) -> Result<()> {
        (**self).unset(key)
    }
}

/// Read-only registry of the host platform's built-in file types.
///
/// Used as a collision oracle: custom extensions must not shadow these.
pub trait MimeRegistry: Send + Sync {
    /// Look up the built-in descriptor for an extension.
    fn descriptor(&self, extension: &str) -> Option<&MimeDescriptor>;

    /// Whether the extension is a built-in type.
    fn contains(&self, extension: &str) -> bool {
        self.descriptor(extension).is_some()
    }
}
