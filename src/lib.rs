#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # aspace-mods: archival description export
//!
//! Maps a resolved ArchivesSpace archival object (or resource) into an
//! intermediate [`ExportModel`] and serializes it either as a compact JSON
//! summary or as a MODS 3.4 XML document.
//!
//! ## Quick Start
//!
//! ### Exporting MODS
//!
//! ```
//! use aspace_mods::{record_to_mods_xml, ExportConfig, SourceRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = SourceRecord::from_json(r#"{
//!     "jsonmodel_type": "archival_object",
//!     "title": "Correspondence",
//!     "component_id": "MS 1 / 4",
//!     "language": "eng",
//!     "dates": [{"label": "creation", "expression": "1921-1930"}]
//! }"#)?;
//!
//! let xml = record_to_mods_xml(&record, &ExportConfig::default())?;
//! assert!(xml.contains("<title>Correspondence, 1921-1930</title>"));
//! assert!(xml.contains("<dateCreated>1921-1930</dateCreated>"));
//! # Ok(())
//! # }
//! ```
//!
//! ### Exporting the JSON summary
//!
//! ```
//! use aspace_mods::{record_to_json, ExportConfig, SourceRecord};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = SourceRecord {
//!     title: "Photographs".to_string(),
//!     language: Some("fre".to_string()),
//!     ..SourceRecord::default()
//! };
//!
//! let json = record_to_json(&record, &ExportConfig::default())?;
//! assert_eq!(json["language"]["text"], "French");
//! # Ok(())
//! # }
//! ```
//!
//! ### Working with the model
//!
//! ```
//! use aspace_mods::{json, mods, ExportConfig, ExportModel, SourceRecord, Variant};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let record = SourceRecord { title: "Minutes".to_string(), ..SourceRecord::default() };
//! let config = ExportConfig::new().with_indent(None);
//!
//! let model = ExportModel::from_source(&record, Variant::Mods, &config)?;
//! let first = mods::model_to_mods_xml(&model, &config)?;
//! assert_eq!(first, mods::model_to_mods_xml(&model, &config)?);
//!
//! let summary = ExportModel::summary(&record, &config)?;
//! assert_eq!(json::model_to_json(&summary)?["title"], "Minutes");
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`source`] — Resolved source records, deserializable from ArchivesSpace JSON
//! - [`mapping`] — Field maps and the driver that applies them
//! - [`handlers`] — Per-field handlers populating the model
//! - [`model`] — The intermediate export model and its field map
//! - [`dates`] — Date normalization shared by both serializers
//! - [`vocab`] — Controlled vocabularies (name parts, digital origin, MIME types)
//! - [`language`] — Language code resolution
//! - [`json`] — JSON summary serialization
//! - [`mods`] — MODS 3.4 serialization
//! - [`xml`] — XML node tree and writer
//! - [`metadata`] — Download filename and MIME type
//! - [`batch`] — Parallel export of many records
//! - [`config`] — Export configuration
//! - [`error`] — Error types and result type

pub mod batch;
pub mod config;
pub mod dates;
pub mod error;
pub mod handlers;
pub mod json;
pub mod language;
pub mod mapping;
pub mod metadata;
pub mod model;
pub mod mods;
pub mod source;
pub mod vocab;
pub mod xml;

pub use config::{ExportConfig, RepositoryNote};
pub use error::{ExportError, Result};
pub use json::{model_to_json, model_to_json_string, record_to_json, record_to_json_string};
pub use language::{Iso639Table, LanguageResolver, LanguageTable};
pub use mapping::{apply_map, FieldMapping, FieldValues, SourceField};
pub use metadata::{export_metadata, ExportMetadata};
pub use model::{ExportModel, Variant, ARCHIVAL_OBJECT_MAP};
pub use mods::{model_to_mods_xml, record_to_mods_xml};
pub use source::{RecordType, SourceRecord};
