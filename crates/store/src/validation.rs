//! Validation of file type input before it reaches the store.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec::{ATTRIBUTE_DIVIDER, ENTRY_DIVIDER};
use crate::error::{EntryField, FileTypeError, Result};
use crate::icons::IconCatalog;

/// Reject input that would corrupt the serialized store.
///
/// No field may contain the entry divider. Only the description may contain
/// the attribute divider, because it is always the last attribute.
pub fn validate_serializable(
    extension: &str,
    mimetype: &str,
    icon: &str,
    description: &str,
) -> Result<()> {
    let fields = [
        (EntryField::Extension, extension),
        (EntryField::Mimetype, mimetype),
        (EntryField::Icon, icon),
        (EntryField::Description, description),
    ];

    for (field, value) in fields {
        let has_attribute_divider =
            field != EntryField::Description && value.contains(ATTRIBUTE_DIVIDER);
        if value.contains(ENTRY_DIVIDER) || has_attribute_divider {
            return Err(FileTypeError::InvalidInput { field });
        }
    }

    Ok(())
}

/// A problem with one field of an [`EntryForm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: EntryField,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: EntryField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Input for adding or editing one custom file type.
///
/// An empty `old_extension` adds a new entry. Otherwise the entry stored
/// under `old_extension` is replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryForm {
    #[serde(default)]
    pub old_extension: String,
    pub extension: String,
    pub mimetype: String,
    pub icon: String,
    pub description: String,
}

impl EntryForm {
    /// Form for a new entry.
    pub fn add(extension: &str, mimetype: &str, icon: &str, description: &str) -> Self {
        Self {
            old_extension: String::new(),
            extension: extension.to_string(),
            mimetype: mimetype.to_string(),
            icon: icon.to_string(),
            description: description.to_string(),
        }
    }

    /// Form replacing the entry stored under `old_extension`.
    pub fn edit(
        old_extension: &str,
        extension: &str,
        mimetype: &str,
        icon: &str,
        description: &str,
    ) -> Self {
        Self {
            old_extension: old_extension.to_string(),
            ..Self::add(extension, mimetype, icon, description)
        }
    }

    pub fn is_edit(&self) -> bool {
        !self.old_extension.is_empty()
    }

    /// Field-level checks that need no store access.
    ///
    /// Extension, MIME type and description are required. When an icon
    /// catalog is given the icon must be one of its names.
    pub fn check_fields(&self, icons: Option<&IconCatalog>) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let required = [
            (EntryField::Extension, &self.extension),
            (EntryField::Mimetype, &self.mimetype),
            (EntryField::Description, &self.description),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(ValidationIssue::new(field, "required"));
            }
        }

        if let Some(icons) = icons {
            if !icons.contains_key(&self.icon) {
                issues.push(ValidationIssue::new(
                    EntryField::Icon,
                    format!("unknown icon '{}'", self.icon),
                ));
            }
        }

        if let Err(FileTypeError::InvalidInput { field }) = validate_serializable(
            &self.extension,
            &self.mimetype,
            &self.icon,
            &self.description,
        ) {
            issues.push(ValidationIssue::new(
                field,
                "must not contain line feed or semicolon characters",
            ));
        }

        issues
    }
}
