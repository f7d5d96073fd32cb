//! Controlled vocabularies used by the export.
//!
//! Each table maps a source code to a standardized output label. Tables are
//! built once, never mutated, and keep their declaration order so callers can
//! list them. A code missing from a table is not an error: lookups return
//! `None` and the exported value stays unset.

use indexmap::IndexMap;
use lazy_static::lazy_static;

use crate::source::AgentType;

lazy_static! {
    /// Name-part field → MODS `namePart/@type`.
    pub static ref NAME_PART_TYPES: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("primary_name", "family"),
        ("title", "termsOfAddress"),
        ("rest_of_name", "given"),
        ("family_name", "family"),
        ("prefix", "termsOfAddress"),
    ]);

    /// Digital object classification code → MODS `digitalOrigin`.
    pub static ref DIGITAL_ORIGINS: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("born_digital", "born digital"),
        ("digitized_micro", "digitized microfilm"),
        ("digitized_other", "digitized other analog"),
        ("reformatted", "reformatted digital"),
    ]);

    /// File format name → MIME type.
    pub static ref MIME_TYPES: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("aiff", "audio/x-aiff"),
        ("avi", "video/x-msvideo"),
        ("gif", "image/gif"),
        ("jpeg", "image/jpeg"),
        ("mov", "video/quicktime"),
        ("mp3", "audio/mp3"),
        ("pdf", "application/pdf"),
        ("tiff", "image/tiff"),
        ("txt", "text/plain"),
        ("wav", "audio/x-wav"),
    ]);
}

/// MODS `name/@type` for an agent subtype. Software agents have none.
#[must_use]
pub const fn name_type(agent_type: AgentType) -> Option<&'static str> {
    match agent_type {
        AgentType::Person => Some("personal"),
        AgentType::Family => Some("family"),
        AgentType::CorporateEntity => Some("corporate"),
        AgentType::Software => None,
    }
}

/// Ordered name fields decomposed into name parts for an agent subtype.
#[must_use]
pub const fn name_part_fields(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Person => &[
            "primary_name",
            "title",
            "prefix",
            "rest_of_name",
            "suffix",
            "fuller_form",
            "number",
        ],
        AgentType::Family => &["family_name", "prefix"],
        AgentType::Software => &["software_name", "version", "manufacturer"],
        AgentType::CorporateEntity => &[
            "primary_name",
            "subordinate_name_1",
            "subordinate_name_2",
            "number",
        ],
    }
}

/// MODS name-part type for a name field.
#[must_use]
pub fn name_part_type(field: &str) -> Option<&'static str> {
    NAME_PART_TYPES.get(field).copied()
}

/// MODS digital origin for a classification code.
#[must_use]
pub fn digital_origin(code: &str) -> Option<&'static str> {
    DIGITAL_ORIGINS.get(code).copied()
}

/// MIME type for a file format name.
#[must_use]
pub fn mime_type(format: &str) -> Option<&'static str> {
    MIME_TYPES.get(format).copied()
}
