use directories::ProjectDirs;
use eyre::Result;
use filetypes_store::DEFAULT_CONFIG_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub icons: IconsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    /// Settings file acting as the configuration backend
    pub path: String,
    /// Key under which custom file types are stored
    #[serde(default = "default_key")]
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IconsConfig {
    pub path: String,
}

fn default_key() -> String {
    DEFAULT_CONFIG_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: get_default_data_dir()
                .join("settings.json")
                .to_string_lossy()
                .to_string(),
            key: default_key(),
        }
    }
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            path: get_default_data_dir()
                .join("pix")
                .join("f")
                .to_string_lossy()
                .to_string(),
        }
    }
}

impl Config {
    pub fn get_config_path() -> PathBuf {
        get_default_config_dir().join("config.json")
    }

    /// Load the configuration, writing defaults on first use.
    pub fn load(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save(config_path)?;
            return Ok(default_config);
        }

        let content = fs::read_to_string(config_path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, config_path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["storage", "path"] => {
                self.storage.path = value.to_string();
            }
            ["storage", "key"] => {
                if value.trim().is_empty() {
                    return Err(eyre::eyre!("Storage key must not be empty"));
                }
                self.storage.key = value.to_string();
            }
            ["icons", "path"] => {
                self.icons.path = value.to_string();
            }
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        }

        Ok(())
    }

    pub fn get_value(&self, key: &str) -> Result<String> {
        let parts: Vec<&str> = key.split('.').collect();

        let value = match parts.as_slice() {
            ["storage", "path"] => self.storage.path.clone(),
            ["storage", "key"] => self.storage.key.clone(),
            ["icons", "path"] => self.icons.path.clone(),
            _ => {
                return Err(eyre::eyre!("Unknown configuration key: {}", key));
            }
        };

        Ok(value)
    }

    pub fn show_all(&self) -> String {
        format!(
            "Configuration:\n\
             Storage:\n\
             ├─ path: {}\n\
             └─ key: {}\n\
             Icons:\n\
             └─ path: {}",
            self.storage.path, self.storage.key, self.icons.path,
        )
    }

    pub fn reset(config_path: &Path) -> Result<Self> {
        let config = Self::default();
        config.save(config_path)?;
        Ok(config)
    }
}

/// Get the default configuration directory
fn get_default_config_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "filetypes", "filetypes") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        // Fallback to current directory if we can't determine project dirs
        PathBuf::from(".filetypes").join("config")
    }
}

/// Get the default data directory
fn get_default_data_dir() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("org", "filetypes", "filetypes") {
        proj_dirs.data_dir().to_path_buf()
    } else {
        PathBuf::from(".filetypes").join("data")
    }
}
