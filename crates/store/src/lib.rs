//! Custom file type registry for the filetypes project.
//!
//! This crate stores administrator-defined extension to MIME type mappings
//! inside a single configuration value and exposes add, update, delete and
//! lookup operations over them. The host platform's built-in types act as a
//! read-only reference table that custom entries must not collide with.

pub mod backends;
pub mod codec;
pub mod error;
pub mod icons;
pub mod reference;
pub mod store;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export the main interface and types for easy access
pub use backends::{JsonFileConfig, MemoryConfig};
pub use codec::{ATTRIBUTE_DIVIDER, ENTRY_DIVIDER};
pub use error::{EntryField, FileTypeError, Result};
pub use icons::{IconCatalog, icon_base_name, icon_catalog};
pub use reference::{MimeDescriptor, ReferenceTable};
pub use store::{DEFAULT_CONFIG_KEY, EntryStore, ImportReport, SubmitAction};
pub use traits::{ConfigBackend, MimeRegistry};
pub use types::{FileTypeEntry, FileTypes};
pub use validation::{EntryForm, ValidationIssue, validate_serializable};
