//! Shared helpers for command handlers.

use eyre::Result;
use filetypes_store::{EntryStore, IconCatalog, JsonFileConfig, ReferenceTable, icon_catalog};
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;

pub type FileTypeStore = EntryStore<JsonFileConfig, ReferenceTable>;

/// Open the entry store described by the configuration
pub fn open_store(config: &Config) -> FileTypeStore {
    tracing::debug!(
        "Using settings file {} (key '{}')",
        config.storage.path,
        config.storage.key
    );
    EntryStore::new(
        JsonFileConfig::new(&config.storage.path),
        ReferenceTable::builtin(),
    )
    .with_key(config.storage.key.clone())
}

/// Icon catalog used to validate icon choices.
///
/// Returns `None` when the icon directory has no icons, in which case any
/// icon name is accepted.
pub fn load_icons(config: &Config) -> Option<IconCatalog> {
    let icons = icon_catalog(Path::new(&config.icons.path));
    if icons.is_empty() {
        tracing::debug!("No icons found, icon names will not be checked");
        None
    } else {
        Some(icons)
    }
}

/// Ask a yes/no question on stdin, defaulting to no
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{} (y/N): ", prompt);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase().starts_with('y'))
}
