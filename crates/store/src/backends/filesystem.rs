//! JSON file configuration backend.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FileTypeError, Result};
use crate::traits::ConfigBackend;

/// Configuration values stored as a flat JSON object in one file.
///
/// ```text
/// {
///   "customfiletypes": "mobi8;application/x-mobipocket-ebook;mobi;Kindle ebook"
/// }
/// ```
///
/// Every call reads the file again, so separate processes see each other's
/// writes. Writes replace the file atomically: a new file is written next to
/// the target and renamed over it. Concurrent writers are last-writer-wins.
#[derive(Debug, Clone)]
pub struct JsonFileConfig {
    path: PathBuf,
}

type Values = BTreeMap<String, String>;

impl JsonFileConfig {
    /// Create a backend for the given file. The file is created on first write.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Values> {
        if !self.path.exists() {
            return Ok(Values::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            FileTypeError::backend(
                "read",
                eyre::eyre!("Failed to read {}: {}", self.path.display(), e),
            )
        })?;

        if content.trim().is_empty() {
            return Ok(Values::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            FileTypeError::backend(
                "parse",
                eyre::eyre!("Invalid configuration file {}: {}", self.path.display(), e),
            )
        })
    }

    fn save(&self, values: &Values) -> Result<()> {
        let parent = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        fs::create_dir_all(&parent).map_err(|e| {
            FileTypeError::backend(
                "write",
                eyre::eyre!("Failed to create directory {}: {}", parent.display(), e),
            )
        })?;

        let content = serde_json::to_string_pretty(values)
            .map_err(|e| FileTypeError::backend("serialize", eyre::Report::new(e)))?;

        let mut file = tempfile::NamedTempFile::new_in(&parent).map_err(|e| {
            FileTypeError::backend(
                "write",
                eyre::eyre!("Failed to create temporary file in {}: {}", parent.display(), e),
            )
        })?;
        file.write_all(content.as_bytes())
            .and_then(|_| file.as_file().sync_all())
            .map_err(|e| FileTypeError::backend("write", eyre::Report::new(e)))?;
        file.persist(&self.path).map_err(|e| {
            FileTypeError::backend(
                "write",
                eyre::eyre!("Failed to replace {}: {}", self.path.display(), e.error),
            )
        })?;

        tracing::debug!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

impl ConfigBackend for JsonFileConfig {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value.to_string());
        self.save(&values)
    }

    fn unset(&self, key: &str) -> Result<()> {
        let mut values = self.load()?;
        if values.remove(key).is_some() {
            self.save(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let temp_dir = TempDir::new().unwrap();
        let config = JsonFileConfig::new(temp_dir.path().join("settings.json"));

        assert_eq!(config.get("customfiletypes").unwrap(), None);
        assert!(!config.path().exists());
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/settings.json");
        let config = JsonFileConfig::new(&path);

        config.set("customfiletypes", "a;b;c;d").unwrap();

        assert!(path.exists());
        assert_eq!(
            config.get("customfiletypes").unwrap().as_deref(),
            Some("a;b;c;d")
        );
    }

    #[test]
    fn test_values_survive_new_handle() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");

        JsonFileConfig::new(&path).set("one", "1").unwrap();
        JsonFileConfig::new(&path).set("two", "line\nbreak").unwrap();

        let config = JsonFileConfig::new(&path);
        assert_eq!(config.get("one").unwrap().as_deref(), Some("1"));
        assert_eq!(config.get("two").unwrap().as_deref(), Some("line\nbreak"));
    }

    #[test]
    fn test_unset_removes_only_that_key() {
        let temp_dir = TempDir::new().unwrap();
        let config = JsonFileConfig::new(temp_dir.path().join("settings.json"));

        config.set("keep", "yes").unwrap();
        config.set("drop", "no").unwrap();
        config.unset("drop").unwrap();
        config.unset("never-set").unwrap();

        assert_eq!(config.get("drop").unwrap(), None);
        assert_eq!(config.get("keep").unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn test_corrupt_file_is_backend_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonFileConfig::new(&path).get("customfiletypes").unwrap_err();
        assert!(matches!(err, FileTypeError::Backend { ref operation, .. } if operation == "parse"));
    }
}
