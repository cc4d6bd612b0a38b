//! In-process configuration backend.

use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::error::{FileTypeError, Result};
use crate::traits::ConfigBackend;

/// Configuration values held in memory.
///
/// Useful for tests and for hosts that own persistence themselves and only
/// need the encoded value.
#[derive(Debug, Default)]
pub struct MemoryConfig {
    values: RwLock<BTreeMap<String, String>>,
}

impl MemoryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-populated with one value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self {
            values: RwLock::new(values),
        }
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values
            .read()
            .map(|values| values.contains_key(key))
            .unwrap_or(false)
    }
}

fn poisoned(operation: &str) -> FileTypeError {
    FileTypeError::backend(operation, eyre::eyre!("configuration lock poisoned"))
}

impl ConfigBackend for MemoryConfig {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.read().map_err(|_| poisoned("get"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned("set"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<()> {
        let mut values = self.values.write().map_err(|_| poisoned("unset"))?;
        values.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_unset() {
        let config = MemoryConfig::new();
        assert_eq!(config.get("k").unwrap(), None);

        config.set("k", "v").unwrap();
        assert_eq!(config.get("k").unwrap().as_deref(), Some("v"));
        assert!(config.contains_key("k"));

        config.unset("k").unwrap();
        assert!(!config.contains_key("k"));
        config.unset("k").unwrap();
    }
}
