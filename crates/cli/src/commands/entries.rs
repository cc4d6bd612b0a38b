use eyre::Result;
use filetypes_store::{EntryForm, FileTypeEntry, FileTypeError, FileTypes, SubmitAction};

use crate::config::Config;
use crate::utils::{FileTypeStore, confirm, load_icons};

pub fn handle_list_command(store: &FileTypeStore) -> Result<()> {
    let types = store.list()?;
    if types.is_empty() {
        println!("You haven't added any custom file types yet.");
        return Ok(());
    }

    println!("{}", format_table(&types));
    println!("\n{} custom file type(s)", types.len());
    Ok(())
}

pub fn handle_show_command(store: &FileTypeStore, extension: &str) -> Result<()> {
    let entry = store.get(extension)?;
    println!("{}", format_entry(&entry));
    Ok(())
}

pub fn handle_add_command(
    store: &FileTypeStore,
    config: &Config,
    form: EntryForm,
    dry_run: bool,
) -> Result<()> {
    if dry_run {
        println!(
            "Would add file type: {} ({}, icon: {}) - {}",
            form.extension.trim(),
            form.mimetype.trim(),
            form.icon,
            form.description.trim()
        );
        return Ok(());
    }

    submit(store, config, &form)
}

#[allow(clippy::too_many_arguments)]
pub fn handle_edit_command(
    store: &FileTypeStore,
    config: &Config,
    old_extension: &str,
    extension: Option<String>,
    mimetype: Option<String>,
    icon: Option<String>,
    description: Option<String>,
    dry_run: bool,
) -> Result<()> {
    let existing = store.get(old_extension)?;
    let form = edit_form(old_extension, existing, extension, mimetype, icon, description);

    if dry_run {
        println!(
            "Would update file type '{}': {} ({}, icon: {}) - {}",
            old_extension,
            form.extension.trim(),
            form.mimetype.trim(),
            form.icon,
            form.description.trim()
        );
        return Ok(());
    }

    submit(store, config, &form)
}

pub fn handle_delete_command(
    store: &FileTypeStore,
    extension: &str,
    force: bool,
    dry_run: bool,
) -> Result<()> {
    // Fail early with a not-found error before prompting
    let entry = store.get(extension)?;

    if dry_run {
        println!("Would delete file type: {}", entry.extension);
        return Ok(());
    }

    if !force
        && !confirm(&format!(
            "Are you absolutely sure you want to remove '{}'?",
            extension
        ))?
    {
        println!("❌ Cancelled");
        return Ok(());
    }

    store.delete(extension)?;
    println!("✅ Deleted file type: {}", extension);
    Ok(())
}

pub fn handle_describe_command(store: &FileTypeStore, mimetype: &str) -> Result<()> {
    let description = store.describe(mimetype);
    if description.is_empty() {
        println!("No custom file type uses MIME type {}", mimetype);
    } else {
        println!("{}", description);
    }
    Ok(())
}

pub fn handle_check_command(
    store: &FileTypeStore,
    extension: &str,
    old: Option<&str>,
) -> Result<()> {
    if store.is_invalid(extension, old) {
        println!("❌ '{}' is a built-in file type", extension.trim());
        return Ok(());
    }

    match store.validate_unique(extension, old) {
        Ok(()) => println!("✅ '{}' is available", extension.trim()),
        Err(e @ FileTypeError::ExtensionTaken { .. }) => println!("❌ {}", e),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn submit(store: &FileTypeStore, config: &Config, form: &EntryForm) -> Result<()> {
    let icons = load_icons(config);

    match store.submit(form, icons.as_ref()) {
        Ok(SubmitAction::Added) => {
            println!("✅ Added file type: {}", form.extension.trim());
            Ok(())
        }
        Ok(SubmitAction::Updated) => {
            println!("✅ Updated file type: {}", form.extension.trim());
            Ok(())
        }
        Err(FileTypeError::Validation { issues }) => {
            for issue in &issues {
                println!("❌ {}", issue);
            }
            Err(FileTypeError::Validation { issues }.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Build an edit form, keeping stored values for fields not given
fn edit_form(
    old_extension: &str,
    existing: FileTypeEntry,
    extension: Option<String>,
    mimetype: Option<String>,
    icon: Option<String>,
    description: Option<String>,
) -> EntryForm {
    EntryForm {
        old_extension: old_extension.to_string(),
        extension: extension.unwrap_or(existing.extension),
        mimetype: mimetype.unwrap_or(existing.mimetype),
        icon: icon.unwrap_or(existing.icon),
        description: description.unwrap_or(existing.description),
    }
}

fn format_entry(entry: &FileTypeEntry) -> String {
    format!(
        "Extension:   {}\n\
         MIME type:   {}\n\
         Icon:        {}\n\
         Description: {}",
        entry.extension, entry.mimetype, entry.icon, entry.description
    )
}

fn format_table(types: &FileTypes) -> String {
    const HEADERS: [&str; 4] = ["Extension", "Icon", "MIME type", "Description"];

    let rows: Vec<[&str; 4]> = types
        .iter()
        .map(|entry| {
            [
                entry.extension.as_str(),
                entry.icon.as_str(),
                entry.mimetype.as_str(),
                entry.description.as_str(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|header| header.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: &[&str; 4]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(&HEADERS)];
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(rows.iter().map(render));
    lines.join("\n")
}
