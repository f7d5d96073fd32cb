//! Download metadata for exported MODS documents.

use lazy_static::lazy_static;
use regex::Regex;

use crate::source::SourceRecord;

/// MIME type of exported MODS documents.
pub const MODS_MIMETYPE: &str = "application/xml";

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").expect("valid regex");
}

/// Filename and MIME type for a record's MODS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportMetadata {
    /// `<identifier>_mods.xml`, whitespace runs replaced by `_`
    pub filename: String,
    /// Always `application/xml`
    pub mimetype: &'static str,
}

/// Derive the download metadata for a record.
///
/// The identifier is the record's component id, or a resource's four-part
/// identifier. A record with neither yields `"_mods.xml"`.
///
/// # Examples
///
/// ```
/// use aspace_mods::{export_metadata, SourceRecord};
///
/// let record = SourceRecord {
///     component_id: Some("MS 42  box\t3".to_string()),
///     ..SourceRecord::default()
/// };
/// let meta = export_metadata(&record);
/// assert_eq!(meta.filename, "MS_42_box_3_mods.xml");
/// assert_eq!(meta.mimetype, "application/xml");
/// ```
#[must_use]
pub fn export_metadata(record: &SourceRecord) -> ExportMetadata {
    let identifier = record.local_identifier().unwrap_or_default();
    let filename = format!("{identifier}_mods.xml");
    ExportMetadata {
        filename: WHITESPACE.replace_all(&filename, "_").into_owned(),
        mimetype: MODS_MIMETYPE,
    }
}
