//! Line-oriented serialization of custom file types.
//!
//! All entries live in one string value. Entries are separated by
//! [`ENTRY_DIVIDER`] and the attributes of one entry by [`ATTRIBUTE_DIVIDER`],
//! in the fixed order `extension;mimetype;icon;description`:
//!
//! ```text
//! mobi8;application/x-mobipocket-ebook;mobi;Kindle ebook
//! war;application/x-zip;archive;Web application archive; Java
//! ```
//!
//! The description is always the last attribute and takes the remainder of
//! the line, so it may contain the attribute divider.

use crate::types::{FileTypeEntry, FileTypes};

/// Character separating whole entries.
pub const ENTRY_DIVIDER: char = '\n';

/// Character separating the attributes of one entry.
pub const ATTRIBUTE_DIVIDER: char = ';';

const FIELD_COUNT: usize = 4;

/// Serialize one entry as a single line.
pub fn encode_entry(entry: &FileTypeEntry) -> String {
    [
        entry.extension.as_str(),
        entry.mimetype.as_str(),
        entry.icon.as_str(),
        entry.description.as_str(),
    ]
    .join(&ATTRIBUTE_DIVIDER.to_string())
}

/// Serialize a sequence of entries into a store value.
pub fn encode<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a FileTypeEntry>,
{
    entries
        .into_iter()
        .map(encode_entry)
        .collect::<Vec<_>>()
        .join(&ENTRY_DIVIDER.to_string())
}

/// Parse one stored line.
///
/// Missing trailing attributes decode as empty strings.
pub fn decode_entry(line: &str) -> FileTypeEntry {
    let mut parts = line.splitn(FIELD_COUNT, ATTRIBUTE_DIVIDER);
    let mut next = || parts.next().unwrap_or_default().to_string();

    FileTypeEntry {
        extension: next(),
        mimetype: next(),
        icon: next(),
        description: next(),
    }
}

/// Parse a whole store value. Blank lines are skipped.
pub fn decode(value: &str) -> FileTypes {
    value
        .split(ENTRY_DIVIDER)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.matches(ATTRIBUTE_DIVIDER).count() < FIELD_COUNT - 1 {
                tracing::warn!("Malformed file type entry: {:?}", line);
            }
            decode_entry(line)
        })
        .collect()
}

/// The extension key of a stored line.
///
/// A line only has a key when the extension is followed by the attribute
/// divider, so `war` never matches a line starting with `warc;`.
pub fn line_extension(line: &str) -> Option<&str> {
    line.split_once(ATTRIBUTE_DIVIDER)
        .map(|(extension, _)| extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_keeps_attribute_divider() {
        let entry = decode_entry("war;application/x-zip;archive;Web archive; Java; EE");
        assert_eq!(entry.extension, "war");
        assert_eq!(entry.mimetype, "application/x-zip");
        assert_eq!(entry.icon, "archive");
        assert_eq!(entry.description, "Web archive; Java; EE");
        assert_eq!(
            encode_entry(&entry),
            "war;application/x-zip;archive;Web archive; Java; EE"
        );
    }

    #[test]
    fn test_short_line_decodes_with_empty_fields() {
        let entry = decode_entry("odd;text/plain");
        assert_eq!(entry.extension, "odd");
        assert_eq!(entry.mimetype, "text/plain");
        assert_eq!(entry.icon, "");
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_decode_skips_blank_lines() {
        let types = decode("\na;x/a;i;A\n\nb;x/b;i;B\n");
        assert_eq!(types.extensions().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_decode_empty_value() {
        assert!(decode("").is_empty());
    }

    #[test]
    fn test_encode_joins_with_entry_divider() {
        let entries = vec![
            FileTypeEntry::new("a", "x/a", "i", "A"),
            FileTypeEntry::new("b", "x/b", "j", "B"),
        ];
        assert_eq!(encode(&entries), "a;x/a;i;A\nb;x/b;j;B");
    }

    #[test]
    fn test_line_extension_requires_divider() {
        assert_eq!(line_extension("warc;x/y;i;d"), Some("warc"));
        assert_eq!(line_extension("war"), None);
        assert_eq!(line_extension(";x/y;i;d"), Some(""));
    }
}
