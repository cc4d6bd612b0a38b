//! Built-in reference table of file types known to the host platform.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::traits::MimeRegistry;

/// Built-in information about one extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MimeDescriptor {
    pub mimetype: String,
    pub icon: String,
}

impl MimeDescriptor {
    pub fn new(mimetype: &str, icon: &str) -> Self {
        Self {
            mimetype: mimetype.to_string(),
            icon: icon.to_string(),
        }
    }
}

// (extension, mimetype, icon)
const BUILTIN_TYPES: &[(&str, &str, &str)] = &[
    ("xxx", "document/unknown", "unknown"),
    ("3gp", "video/quicktime", "quicktime"),
    ("7z", "application/x-7z-compressed", "archive"),
    ("aac", "audio/aac", "audio"),
    ("ai", "application/postscript", "eps"),
    ("aif", "audio/x-aiff", "audio"),
    ("aiff", "audio/x-aiff", "audio"),
    ("asc", "text/plain", "sourcecode"),
    ("asm", "text/plain", "sourcecode"),
    ("au", "audio/au", "audio"),
    ("avi", "video/x-ms-wm", "avi"),
    ("bmp", "image/bmp", "bmp"),
    ("c", "text/plain", "sourcecode"),
    ("cpp", "text/plain", "sourcecode"),
    ("css", "text/css", "text"),
    ("csv", "text/csv", "spreadsheet"),
    ("doc", "application/msword", "document"),
    ("docx", "application/vnd.openxmlformats-officedocument.wordprocessingml.document", "document"),
    ("epub", "application/epub+zip", "epub"),
    ("flac", "audio/flac", "audio"),
    ("flv", "video/x-flv", "flash"),
    ("gif", "image/gif", "gif"),
    ("gz", "application/g-zip", "archive"),
    ("h", "text/plain", "sourcecode"),
    ("htm", "text/html", "html"),
    ("html", "text/html", "html"),
    ("ico", "image/vnd.microsoft.icon", "image"),
    ("java", "text/plain", "sourcecode"),
    ("jpe", "image/jpeg", "jpeg"),
    ("jpeg", "image/jpeg", "jpeg"),
    ("jpg", "image/jpeg", "jpeg"),
    ("js", "application/x-javascript", "text"),
    ("json", "application/json", "text"),
    ("m3u", "audio/x-mpegurl", "mp3"),
    ("m4a", "audio/mp4", "mp3"),
    ("m4v", "video/mp4", "mpeg"),
    ("md", "text/markdown", "markdown"),
    ("mov", "video/quicktime", "quicktime"),
    ("mp3", "audio/mp3", "mp3"),
    ("mp4", "video/mp4", "mpeg"),
    ("mpeg", "video/mpeg", "mpeg"),
    ("mpg", "video/mpeg", "mpeg"),
    ("odp", "application/vnd.oasis.opendocument.presentation", "writer"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet", "calc"),
    ("odt", "application/vnd.oasis.opendocument.text", "writer"),
    ("oga", "audio/ogg", "audio"),
    ("ogg", "audio/ogg", "audio"),
    ("ogv", "video/ogg", "video"),
    ("pdf", "application/pdf", "pdf"),
    ("php", "text/plain", "sourcecode"),
    ("png", "image/png", "png"),
    ("ppt", "application/vnd.ms-powerpoint", "powerpoint"),
    ("pptx", "application/vnd.openxmlformats-officedocument.presentationml.presentation", "powerpoint"),
    ("ps", "application/postscript", "pdf"),
    ("py", "text/plain", "sourcecode"),
    ("rar", "application/x-rar-compressed", "archive"),
    ("rtf", "text/rtf", "text"),
    ("svg", "image/svg+xml", "image"),
    ("swf", "application/x-shockwave-flash", "flash"),
    ("tar", "application/x-tar", "archive"),
    ("tif", "image/tiff", "tiff"),
    ("tiff", "image/tiff", "tiff"),
    ("tgz", "application/g-zip", "archive"),
    ("txt", "text/plain", "text"),
    ("wav", "audio/wav", "wav"),
    ("webm", "video/webm", "video"),
    ("webp", "image/webp", "image"),
    ("wmv", "video/x-ms-wmv", "wmv"),
    ("xls", "application/vnd.ms-excel", "spreadsheet"),
    ("xlsx", "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", "spreadsheet"),
    ("xml", "application/xml", "markup"),
    ("zip", "application/zip", "archive"),
];

static BUILTIN: Lazy<ReferenceTable> = Lazy::new(|| {
    ReferenceTable::from_entries(
        BUILTIN_TYPES
            .iter()
            .map(|(ext, mime, icon)| (ext.to_string(), MimeDescriptor::new(mime, icon))),
    )
});

/// Extension to descriptor lookup table.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    types: HashMap<String, MimeDescriptor>,
}

impl ReferenceTable {
    /// The host platform's built-in file types.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, MimeDescriptor)>,
    {
        Self {
            types: entries.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl MimeRegistry for ReferenceTable {
    fn descriptor(&self, extension: &str) -> Option<&MimeDescriptor> {
        self.types.get(extension)
    }
}
