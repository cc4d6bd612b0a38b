use eyre::{Result, WrapErr};
use filetypes_store::codec;
use std::fs;
use std::path::Path;

use crate::utils::FileTypeStore;

pub fn handle_export_command(store: &FileTypeStore) -> Result<()> {
    let value = store.export()?;
    if !value.is_empty() {
        println!("{}", value);
    }
    Ok(())
}

pub fn handle_import_command(store: &FileTypeStore, file: &Path, dry_run: bool) -> Result<()> {
    let content = fs::read_to_string(file)
        .wrap_err_with(|| format!("Failed to read import file {}", file.display()))?;

    if dry_run {
        let types = codec::decode(&content);
        println!("Would import {} file type(s):", types.len());
        for extension in types.extensions() {
            println!("  - {}", extension);
        }
        return Ok(());
    }

    let report = store.import(&content)?;
    for extension in &report.added {
        println!("✅ Imported: {}", extension);
    }
    for (extension, reason) in &report.skipped {
        println!("⚠️  Skipped {}: {}", extension, reason);
    }
    println!(
        "\n{} imported, {} skipped",
        report.added.len(),
        report.skipped.len()
    );
    Ok(())
}
