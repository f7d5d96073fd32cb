//! Source record structures.
//!
//! These types mirror the ArchivesSpace JSON model for archival objects and
//! resources after reference resolution: every linked subject, agent and
//! digital object is embedded under a `_resolved` key next to its `ref`.
//!
//! - [`SourceRecord`] — the archival object or resource being exported
//! - [`Date`], [`Extent`], [`Note`] — descriptive sub-records
//! - [`Subject`], [`LinkedAgent`], [`Instance`] — resolved linked records
//!
//! Records are never mutated by the export engine.
//!
//! # Examples
//!
//! ```
//! use aspace_mods::SourceRecord;
//!
//! let record = SourceRecord::from_json(r#"{
//!     "jsonmodel_type": "archival_object",
//!     "title": "Letters",
//!     "component_id": "MS 12 f.3",
//!     "dates": [{"label": "creation", "expression": "1921"}]
//! }"#)?;
//!
//! assert_eq!(record.title, "Letters");
//! assert_eq!(record.local_identifier().as_deref(), Some("MS 12 f.3"));
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ExportError, Result};

/// Kind of archival description being exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordType {
    /// A component of a collection
    #[default]
    ArchivalObject,
    /// A top-level collection description
    Resource,
}

/// An archival object or resource with its linked records resolved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRecord {
    /// Record kind, read from `jsonmodel_type`
    #[serde(rename = "jsonmodel_type", default)]
    pub record_type: RecordType,
    /// Record title
    #[serde(default)]
    pub title: String,
    /// Record URI (e.g. `/repositories/2/archival_objects/14`)
    #[serde(default)]
    pub uri: Option<String>,
    /// Local identifier of an archival object
    #[serde(default)]
    pub component_id: Option<String>,
    /// First part of a resource identifier
    #[serde(default)]
    pub id_0: Option<String>,
    /// Second part of a resource identifier
    #[serde(default)]
    pub id_1: Option<String>,
    /// Third part of a resource identifier
    #[serde(default)]
    pub id_2: Option<String>,
    /// Fourth part of a resource identifier
    #[serde(default)]
    pub id_3: Option<String>,
    /// ISO 639-2/B language code
    #[serde(default)]
    pub language: Option<String>,
    /// Dates, in source order
    #[serde(default)]
    pub dates: Vec<Date>,
    /// Extents, in source order
    #[serde(default)]
    pub extents: Vec<Extent>,
    /// Notes, in source order
    #[serde(default)]
    pub notes: Vec<Note>,
    /// Linked subjects
    #[serde(default)]
    pub subjects: Vec<Resolved<Subject>>,
    /// Linked agents with their roles
    #[serde(default)]
    pub linked_agents: Vec<LinkedAgent>,
    /// Instances (containers and digital objects)
    #[serde(default)]
    pub instances: Vec<Instance>,
}

impl SourceRecord {
    /// Read a resolved record from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidSource`] if the text is not a valid
    /// archival object or resource.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExportError::InvalidSource(e.to_string()))
    }

    /// Read a resolved record from a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidSource`] if the value does not describe
    /// an archival object or resource.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| ExportError::InvalidSource(e.to_string()))
    }

    /// The local identifier exported as `identifier[type=local]`.
    ///
    /// Archival objects use `component_id`. Resources without one fall back
    /// to their four-part identifier, non-empty parts joined with `-`.
    #[must_use]
    pub fn local_identifier(&self) -> Option<String> {
        if let Some(id) = non_empty(self.component_id.as_deref()) {
            return Some(id.to_string());
        }
        if self.record_type != RecordType::Resource {
            return None;
        }
        let parts: Vec<&str> = [&self.id_0, &self.id_1, &self.id_2, &self.id_3]
            .into_iter()
            .filter_map(|part| non_empty(part.as_deref()))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join("-"))
        }
    }

    /// Label used to identify this record in error messages.
    #[must_use]
    pub fn display_id(&self) -> String {
        non_empty(self.uri.as_deref())
            .map(str::to_string)
            .or_else(|| self.local_identifier())
            .unwrap_or_else(|| format!("'{}'", self.title))
    }
}

/// Date label, deciding the exported date type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateLabel {
    /// Creation of the material
    Creation,
    /// Digitization
    Digitized,
    /// Copyright
    Copyright,
    /// Last modification
    Modified,
    /// Issue
    Issued,
    /// Broadcast
    Broadcast,
    /// Publication
    Publication,
    /// Any other label
    #[default]
    #[serde(other)]
    Other,
}

/// Certainty of a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certainty {
    /// Approximate date
    Approximate,
    /// Inferred date
    Inferred,
    /// Questionable date
    Questionable,
    /// Unrecognized certainty value
    #[serde(other)]
    Unspecified,
}

impl Certainty {
    /// The MODS `qualifier` value, if this certainty has one.
    #[must_use]
    pub const fn qualifier(self) -> Option<&'static str> {
        match self {
            Self::Approximate => Some("approximate"),
            Self::Inferred => Some("inferred"),
            Self::Questionable => Some("questionable"),
            Self::Unspecified => None,
        }
    }
}

/// A date sub-record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Date {
    /// What the date describes
    #[serde(default)]
    pub label: DateLabel,
    /// Start of the range (partial-precision ISO date)
    #[serde(default)]
    pub begin: Option<String>,
    /// End of the range
    #[serde(default)]
    pub end: Option<String>,
    /// Free-text expression
    #[serde(default)]
    pub expression: Option<String>,
    /// Certainty of the date
    #[serde(default)]
    pub certainty: Option<Certainty>,
}

/// An extent sub-record (e.g. "3 boxes").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extent {
    /// Quantity, kept as text
    #[serde(default)]
    pub number: String,
    /// Unit of the quantity
    #[serde(default)]
    pub extent_type: String,
    /// `whole` or `part`
    #[serde(default)]
    pub portion: Option<String>,
    /// Physical details statement
    #[serde(default)]
    pub physical_details: Option<String>,
    /// Dimensions statement
    #[serde(default)]
    pub dimensions: Option<String>,
}

/// A note sub-record.
///
/// Single-part notes carry their text in `content`; multipart notes carry it
/// in `subnotes`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note type (`accessrestrict`, `physdesc`, `abstract`, ...)
    #[serde(rename = "type", default)]
    pub note_type: String,
    /// Display label
    #[serde(default)]
    pub label: Option<String>,
    /// Content fragments of a single-part note
    #[serde(default, deserialize_with = "one_or_many")]
    pub content: Vec<String>,
    /// Sub-notes of a multipart note
    #[serde(default)]
    pub subnotes: Vec<SubNote>,
    /// Whether the note may be published
    #[serde(default)]
    pub publish: bool,
}

/// A text sub-note of a multipart note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubNote {
    /// Content fragments
    #[serde(default, deserialize_with = "one_or_many")]
    pub content: Vec<String>,
    /// Whether the sub-note may be published; absent means published
    #[serde(default)]
    pub publish: Option<bool>,
}

impl Note {
    /// Whether this note describes the physical extent of the material.
    #[must_use]
    pub fn is_extent_note(&self) -> bool {
        self.note_type == "physdesc" || self.note_type == "dimensions"
    }

    /// Extract the plain text of the note.
    ///
    /// Content fragments and published sub-note fragments are joined with a
    /// single space, skipping empty fragments.
    #[must_use]
    pub fn text(&self) -> String {
        let subnote_text = self
            .subnotes
            .iter()
            .filter(|sub| sub.publish.unwrap_or(true))
            .flat_map(|sub| sub.content.iter());
        self.content
            .iter()
            .chain(subnote_text)
            .map(|fragment| fragment.trim())
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A reference to another record with the record embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved<T> {
    /// URI of the referenced record
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    /// The referenced record
    #[serde(rename = "_resolved")]
    pub resolved: T,
}

impl<T> Resolved<T> {
    /// Wrap an already resolved record.
    pub fn new(resolved: T) -> Self {
        Resolved {
            reference: None,
            resolved,
        }
    }
}

/// A subject heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    /// Authority source (e.g. `lcsh`)
    #[serde(default)]
    pub source: Option<String>,
    /// Ordered terms of the heading
    #[serde(default)]
    pub terms: Vec<Term>,
    /// Authority URI or identifier
    #[serde(default)]
    pub authority_id: Option<String>,
}

/// A single term of a subject heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    /// Term text
    #[serde(default)]
    pub term: String,
    /// Term type (`topical`, `geographic`, `temporal`, `uniform_title`, ...)
    #[serde(default)]
    pub term_type: String,
}

/// Agent record subtype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AgentType {
    /// A person
    #[default]
    #[serde(rename = "agent_person")]
    Person,
    /// A family
    #[serde(rename = "agent_family")]
    Family,
    /// A corporate body
    #[serde(rename = "agent_corporate_entity")]
    CorporateEntity,
    /// A software agent
    #[serde(rename = "agent_software")]
    Software,
}

impl AgentType {
    /// The raw `jsonmodel_type` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Person => "agent_person",
            Self::Family => "agent_family",
            Self::CorporateEntity => "agent_corporate_entity",
            Self::Software => "agent_software",
        }
    }
}

/// A link from the record to an agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedAgent {
    /// Role of the agent (`creator`, `source`, `subject`, ...)
    #[serde(default)]
    pub role: String,
    /// URI of the agent
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
    /// The embedded agent
    #[serde(rename = "_resolved")]
    pub agent: Agent,
}

impl LinkedAgent {
    /// Whether the agent is linked as a subject of the record.
    #[must_use]
    pub fn is_subject(&self) -> bool {
        self.role == "subject"
    }
}

/// A resolved agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent subtype
    #[serde(rename = "jsonmodel_type", default)]
    pub agent_type: AgentType,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// All name forms of the agent
    #[serde(default)]
    pub names: Vec<AgentName>,
    /// The name form chosen for display
    #[serde(default)]
    pub display_name: Option<AgentName>,
}

/// One name form of an agent.
///
/// Only the fields relevant to the agent's subtype are populated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentName {
    /// Surname, corporate or primary name
    #[serde(default)]
    pub primary_name: Option<String>,
    /// Title or honorific
    #[serde(default)]
    pub title: Option<String>,
    /// Name prefix
    #[serde(default)]
    pub prefix: Option<String>,
    /// Forenames
    #[serde(default)]
    pub rest_of_name: Option<String>,
    /// Name suffix
    #[serde(default)]
    pub suffix: Option<String>,
    /// Fuller form of the name
    #[serde(default)]
    pub fuller_form: Option<String>,
    /// Regnal or generational number
    #[serde(default)]
    pub number: Option<String>,
    /// Family name
    #[serde(default)]
    pub family_name: Option<String>,
    /// Software product name
    #[serde(default)]
    pub software_name: Option<String>,
    /// Software version
    #[serde(default)]
    pub version: Option<String>,
    /// Software manufacturer
    #[serde(default)]
    pub manufacturer: Option<String>,
    /// First subordinate unit
    #[serde(default)]
    pub subordinate_name_1: Option<String>,
    /// Second subordinate unit
    #[serde(default)]
    pub subordinate_name_2: Option<String>,
    /// Name authority source
    #[serde(default)]
    pub source: Option<String>,
    /// Sortable display form
    #[serde(default)]
    pub sort_name: Option<String>,
    /// Authority URI or identifier
    #[serde(default)]
    pub authority_id: Option<String>,
}

impl AgentName {
    /// Look up a name field by its source key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&str> {
        let value = match key {
            "primary_name" => &self.primary_name,
            "title" => &self.title,
            "prefix" => &self.prefix,
            "rest_of_name" => &self.rest_of_name,
            "suffix" => &self.suffix,
            "fuller_form" => &self.fuller_form,
            "number" => &self.number,
            "family_name" => &self.family_name,
            "software_name" => &self.software_name,
            "version" => &self.version,
            "manufacturer" => &self.manufacturer,
            "subordinate_name_1" => &self.subordinate_name_1,
            "subordinate_name_2" => &self.subordinate_name_2,
            _ => return None,
        };
        non_empty(value.as_deref())
    }
}

/// An instance linking the record to a container or digital object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Instance type (`digital_object`, `mixed_materials`, ...)
    #[serde(default)]
    pub instance_type: String,
    /// Whether this is the representative digital surrogate
    #[serde(default)]
    pub is_representative: bool,
    /// The linked digital object, for digital object instances
    #[serde(default)]
    pub digital_object: Option<Resolved<DigitalObject>>,
}

impl Instance {
    /// Whether this is a representative digital object instance.
    #[must_use]
    pub fn is_representative_digital_object(&self) -> bool {
        self.instance_type == "digital_object" && self.is_representative
    }
}

/// A resolved digital object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalObject {
    /// File versions, in source order
    #[serde(default)]
    pub file_versions: Vec<FileVersion>,
    /// User-defined fields
    #[serde(default)]
    pub user_defined: Option<UserDefined>,
}

impl DigitalObject {
    /// The user-defined classification code that selects a digital origin.
    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        self.user_defined
            .as_ref()
            .and_then(|ud| non_empty(ud.enum_2.as_deref()))
    }
}

/// One file of a digital object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileVersion {
    /// Location of the file
    #[serde(default)]
    pub file_uri: String,
    /// File format name (`jpeg`, `pdf`, ...)
    #[serde(default)]
    pub file_format_name: Option<String>,
    /// Caption
    #[serde(default)]
    pub caption: Option<String>,
}

/// User-defined fields of a digital object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDefined {
    /// Second user-defined enumeration, holding the digital origin code
    #[serde(default)]
    pub enum_2: Option<String>,
}

/// Returns the value when it is present and not empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
        Nothing(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
        OneOrMany::Nothing(()) => Vec::new(),
    })
}
