//! Export models.
//!
//! An [`ExportModel`] is the intermediate form between a [`SourceRecord`] and
//! a serialized document. One model type serves both output variants; the
//! [`Variant`] chosen at construction decides which rendering rules the field
//! handlers apply (extent token order, note routing, subject and name shape).
//!
//! # Examples
//!
//! ```
//! use aspace_mods::{ExportConfig, ExportModel, SourceRecord, Variant};
//!
//! let record = SourceRecord { title: "Ledger".to_string(), ..SourceRecord::default() };
//! let model = ExportModel::from_source(&record, Variant::Mods, &ExportConfig::default())?;
//! assert_eq!(model.title, "Ledger");
//! assert!(model.digital_origin.is_empty());
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use smallvec::SmallVec;
use tracing::debug;

use crate::config::{ExportConfig, RepositoryNote};
use crate::error::Result;
use crate::handlers;
use crate::mapping::{apply_map, FieldMapping, SourceField};
use crate::source::{Date, SourceRecord};

/// Output variant a model is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Simplified JSON summary
    Summary,
    /// MODS 3.4 XML
    Mods,
}

/// Field map for archival objects and resources, in canonical order.
pub const ARCHIVAL_OBJECT_MAP: &[FieldMapping<ExportModel>] = &[
    FieldMapping::new(&[SourceField::Title, SourceField::Dates], handlers::title),
    FieldMapping::new(&[SourceField::Uri], handlers::uri),
    FieldMapping::new(&[SourceField::ComponentId], handlers::local_identifier),
    FieldMapping::new(&[SourceField::Language], handlers::language),
    FieldMapping::new(&[SourceField::Dates], handlers::dates),
    FieldMapping::new(&[SourceField::Extents, SourceField::Notes], handlers::extents),
    FieldMapping::new(&[SourceField::Subjects], handlers::subjects),
    FieldMapping::new(&[SourceField::LinkedAgents], handlers::agents),
    FieldMapping::new(&[SourceField::Notes], handlers::notes),
    FieldMapping::new(&[SourceField::Instances], handlers::instances),
];

/// A language as a display label plus its ISO 639-2/B code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTerm {
    /// Display label (e.g. "English")
    pub label: String,
    /// Language code (e.g. "eng")
    pub code: String,
}

/// A note routed to its output element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNote {
    /// MODS element name (`note`, `accessCondition`, `abstract`)
    pub tag: &'static str,
    /// Note subtype, rendered as `@type` in MODS and `type` in JSON
    pub note_type: Option<String>,
    /// Display label, rendered as `@displayLabel`
    pub label: Option<String>,
    /// Note text
    pub content: String,
    /// Element the note is nested in, if any
    pub wrapping_tag: Option<String>,
}

impl ModelNote {
    /// A plain `note` element.
    pub fn note(note_type: impl Into<String>, label: Option<String>, content: impl Into<String>) -> Self {
        ModelNote {
            tag: "note",
            note_type: Some(note_type.into()),
            label,
            content: content.into(),
            wrapping_tag: None,
        }
    }
}

/// A term of a subject heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectTerm {
    /// Term text
    pub term: String,
    /// Term type, choosing the MODS child element
    pub term_type: String,
}

/// A subject heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSubject {
    /// Authority source
    pub source: Option<String>,
    /// Ordered terms
    pub terms: Vec<SubjectTerm>,
    /// Heading title; summary only
    pub title: Option<String>,
    /// Authority identifier
    pub authority_id: Option<String>,
}

/// A decomposed fragment of a name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePart {
    /// MODS name-part type, if the field has one
    pub part_type: Option<&'static str>,
    /// Fragment text; never empty
    pub content: String,
}

/// A name linked to the record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelName {
    /// Role of the agent (`creator`, `subject`, ...)
    pub role: String,
    /// Name type: MODS vocabulary for MODS, raw agent tag for the summary
    pub name_type: Option<String>,
    /// Authority source
    pub source: Option<String>,
    /// Decomposed name parts; MODS only
    pub parts: SmallVec<[NamePart; 4]>,
    /// Sortable display form; MODS only
    pub display_form: Option<String>,
    /// Agent title; summary only
    pub title: Option<String>,
    /// Authority identifier; summary only
    pub authority_id: Option<String>,
}

impl ModelName {
    /// Whether the agent is linked as a subject.
    #[must_use]
    pub fn is_subject(&self) -> bool {
        self.role == "subject"
    }
}

/// One file of a representative digital object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Part {
    /// MIME type, when the file format is known
    pub mime_type: Option<&'static str>,
    /// 1-based position within its digital object
    pub order: usize,
    /// File URI, used as the part title
    pub file_uri: String,
    /// Caption
    pub caption: Option<String>,
}

/// Intermediate representation populated by the field handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportModel {
    /// Variant the model was built for
    pub variant: Variant,
    /// Title, with creation date expressions appended
    pub title: String,
    /// Record URI
    pub uri: Option<String>,
    /// Local identifier
    pub local_identifier: Option<String>,
    /// Language, unset when the record has no language code
    pub language: Option<LanguageTerm>,
    /// Source dates, normalized at render time
    pub dates: Vec<Date>,
    /// Rendered extent statements
    pub extents: Vec<String>,
    /// Physical description and dimensions notes
    pub extent_notes: Vec<ModelNote>,
    /// General notes
    pub notes: Vec<ModelNote>,
    /// Subject headings (and, in the summary, subject agents)
    pub subjects: Vec<ModelSubject>,
    /// Names
    pub names: Vec<ModelName>,
    /// Digital object parts
    pub parts: Vec<Part>,
    /// MODS digital origin; empty until the first known classification
    pub digital_origin: String,
    /// MODS `typeOfResource`
    pub type_of_resource: Option<String>,
    /// MODS repository note
    pub repository_note: Option<RepositoryNote>,
}

impl ExportModel {
    /// Create an empty model for `variant`.
    #[must_use]
    pub fn new(variant: Variant) -> Self {
        ExportModel {
            variant,
            title: String::new(),
            uri: None,
            local_identifier: None,
            language: None,
            dates: Vec::new(),
            extents: Vec::new(),
            extent_notes: Vec::new(),
            notes: Vec::new(),
            subjects: Vec::new(),
            names: Vec::new(),
            parts: Vec::new(),
            digital_origin: String::new(),
            type_of_resource: None,
            repository_note: None,
        }
    }

    /// Build a model from a resolved source record.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::Mapping`] if a source field is malformed.
    pub fn from_source(record: &SourceRecord, variant: Variant, config: &ExportConfig) -> Result<Self> {
        debug!(record = %record.display_id(), ?variant, "building export model");
        let mut model = ExportModel::new(variant);
        apply_map(&mut model, record, ARCHIVAL_OBJECT_MAP, config)?;

        if variant == Variant::Mods {
            model.type_of_resource.clone_from(&config.type_of_resource);
            model.repository_note.clone_from(&config.repository_note);
        }
        Ok(model)
    }

    /// Build a summary model.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::Mapping`] if a source field is malformed.
    pub fn summary(record: &SourceRecord, config: &ExportConfig) -> Result<Self> {
        Self::from_source(record, Variant::Summary, config)
    }

    /// Build a MODS model.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ExportError::Mapping`] if a source field is malformed.
    pub fn mods(record: &SourceRecord, config: &ExportConfig) -> Result<Self> {
        Self::from_source(record, Variant::Mods, config)
    }
}
