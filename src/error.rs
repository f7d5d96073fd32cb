//! Error types for export operations.
//!
//! This module provides the [`ExportError`] type for all mapping and
//! serialization operations and the [`Result`] convenience type.
//!
//! Vocabulary misses (an unknown file format, an unknown digital-origin code)
//! are deliberately absent here: they leave the affected value unset and
//! processing continues.

use thiserror::Error;

/// Error type for all export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// A source record field is structurally malformed and cannot be mapped.
    ///
    /// `field` names the source field being mapped (e.g. `linked_agents`) and
    /// `record` identifies the record (its URI, or its local identifier when
    /// the URI is missing).
    #[error("Mapping error in field '{field}' of record {record}: {reason}")]
    Mapping {
        /// Source field being mapped
        field: &'static str,
        /// Identifier of the offending record
        record: String,
        /// What was wrong with the field
        reason: String,
    },

    /// The source record could not be read from its JSON representation.
    #[error("Invalid source record: {0}")]
    InvalidSource(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML serialization failed.
    #[error("XML error: {0}")]
    Xml(String),
}

impl From<quick_xml::Error> for ExportError {
    fn from(err: quick_xml::Error) -> Self {
        ExportError::Xml(err.to_string())
    }
}

/// Convenience type alias for [`std::result::Result`] with [`ExportError`].
pub type Result<T> = std::result::Result<T, ExportError>;
