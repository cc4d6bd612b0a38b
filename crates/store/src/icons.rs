//! Discovery of file type icons in an asset directory.
//!
//! Icons come in several sizes that share one logical name, e.g. `pdf.png`,
//! `pdf-24.png` and `pdf-32.png` are all the icon `pdf`.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

/// Size suffixes stripped from icon file names.
pub const ICON_SIZES: &[u32] = &[24, 32, 48, 64, 72, 80, 96, 128, 256];

static ICON_FILE: Lazy<Regex> = Lazy::new(|| {
    let sizes = ICON_SIZES
        .iter()
        .map(|size| format!("-{}", size))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"^(.+?)(?:{})?\.(?:gif|png)$", sizes)).expect("valid icon pattern")
});

/// Sorted icon names. Keys and values are both the icon base name.
pub type IconCatalog = BTreeMap<String, String>;

/// The icon name a file contributes, if it is an icon file at all.
pub fn icon_base_name(file_name: &str) -> Option<&str> {
    ICON_FILE
        .captures(file_name)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Collect the unique icon names in a directory.
///
/// Sub-directories are ignored. A missing or unreadable directory yields an
/// empty catalog.
pub fn icon_catalog<P: AsRef<Path>>(path: P) -> IconCatalog {
    let path = path.as_ref();
    let mut icons = IconCatalog::new();

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Cannot read icon directory {}: {}", path.display(), e);
            return icons;
        }
    };

    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            continue;
        };
        if let Some(name) = icon_base_name(file_name) {
            icons.insert(name.to_string(), name.to_string());
        }
    }

    tracing::debug!("Found {} icons in {}", icons.len(), path.display());
    icons
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_icon_base_name() {
        assert_eq!(icon_base_name("pdf.png"), Some("pdf"));
        assert_eq!(icon_base_name("pdf-24.png"), Some("pdf"));
        assert_eq!(icon_base_name("spreadsheet-256.gif"), Some("spreadsheet"));
        assert_eq!(icon_base_name("archive-12.png"), Some("archive-12"));
        assert_eq!(icon_base_name("pdf.svg"), None);
        assert_eq!(icon_base_name("pdf.png.bak"), None);
        assert_eq!(icon_base_name(".png"), None);
    }

    #[test]
    fn test_catalog_collapses_sizes() {
        let temp_dir = TempDir::new().unwrap();
        for name in [
            "pdf.png",
            "pdf-24.png",
            "pdf-32.png",
            "document-64.gif",
            "readme.txt",
            "logo.svg",
        ] {
            fs::write(temp_dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(temp_dir.path().join("nested.png")).unwrap();

        let icons = icon_catalog(temp_dir.path());

        assert_eq!(icons.keys().collect::<Vec<_>>(), vec!["document", "pdf"]);
        assert_eq!(icons.get("pdf").map(String::as_str), Some("pdf"));
    }

    #[test]
    fn test_missing_directory_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        assert!(icon_catalog(temp_dir.path().join("missing")).is_empty());
    }
}
