//! Error types for the custom file type store.

use std::fmt;

use thiserror::Error;

use crate::validation::ValidationIssue;

/// One of the four attributes of a file type entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Extension,
    Mimetype,
    Icon,
    Description,
}

impl EntryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryField::Extension => "extension",
            EntryField::Mimetype => "mimetype",
            EntryField::Icon => "icon",
            EntryField::Description => "description",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while managing custom file types.
#[derive(Debug, Error)]
pub enum FileTypeError {
    #[error(
        "Invalid {field}: the file type extension, description, MIME type, and icon must not \
         contain line feed and semicolon characters"
    )]
    InvalidInput { field: EntryField },

    #[error("The file type with extension {extension} cannot be found")]
    NotFound { extension: String },

    #[error(
        "The file type extension '{extension}' already exists or is invalid. \
         File extensions must be unique"
    )]
    ExtensionTaken { extension: String },

    #[error("Invalid file type: {}", format_issues(.issues))]
    Validation { issues: Vec<ValidationIssue> },

    #[error("Configuration backend operation failed: {operation}")]
    Backend {
        operation: String,
        #[source]
        source: Option<eyre::Report>,
    },
}

impl FileTypeError {
    pub(crate) fn not_found(extension: &str) -> Self {
        Self::NotFound {
            extension: extension.to_string(),
        }
    }

    pub(crate) fn backend(operation: impl Into<String>, source: eyre::Report) -> Self {
        Self::Backend {
            operation: operation.into(),
            source: Some(source),
        }
    }
}

fn format_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for file type store operations.
pub type Result<T> = std::result::Result<T, FileTypeError>;
