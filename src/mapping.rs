//! Field-map driven population of export models.
//!
//! A field map is an ordered list of [`FieldMapping`] entries. Each entry
//! names one or more [`SourceField`]s and the handler that consumes them.
//! [`apply_map`] walks the map in order, extracts the named fields from the
//! source record and calls the handler with the model being built.
//!
//! Order matters: a handler may read state left on the model by an earlier
//! entry. Every entry runs, even when its source fields are absent; absent
//! fields reach the handler as empty values. Handler errors are returned
//! unchanged.
//!
//! # Examples
//!
//! ```
//! use aspace_mods::mapping::{apply_map, FieldMapping, FieldValues, SourceField};
//! use aspace_mods::{ExportConfig, Result, SourceRecord};
//!
//! #[derive(Default)]
//! struct Titles(Vec<String>);
//!
//! fn collect_title(model: &mut Titles, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
//!     model.0.push(values.text(SourceField::Title)?.unwrap_or_default().to_string());
//!     Ok(())
//! }
//!
//! const MAP: &[FieldMapping<Titles>] = &[FieldMapping::new(&[SourceField::Title], collect_title)];
//!
//! let record = SourceRecord { title: "Diaries".to_string(), ..SourceRecord::default() };
//! let mut titles = Titles::default();
//! apply_map(&mut titles, &record, MAP, &ExportConfig::default())?;
//! assert_eq!(titles.0, vec!["Diaries".to_string()]);
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use std::borrow::Cow;
use std::fmt;

use tracing::trace;

use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use crate::source::{Date, Extent, Instance, LinkedAgent, Note, Resolved, SourceRecord, Subject};

/// A named field of a [`SourceRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceField {
    /// `title`
    Title,
    /// `uri`
    Uri,
    /// `component_id` (or the resource identifier)
    ComponentId,
    /// `language`
    Language,
    /// `dates`
    Dates,
    /// `extents`
    Extents,
    /// `notes`
    Notes,
    /// `subjects`
    Subjects,
    /// `linked_agents`
    LinkedAgents,
    /// `instances`
    Instances,
}

impl SourceField {
    /// Source field name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Uri => "uri",
            Self::ComponentId => "component_id",
            Self::Language => "language",
            Self::Dates => "dates",
            Self::Extents => "extents",
            Self::Notes => "notes",
            Self::Subjects => "subjects",
            Self::LinkedAgents => "linked_agents",
            Self::Instances => "instances",
        }
    }
}

impl fmt::Display for SourceField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value extracted from a source record.
#[derive(Debug, Clone)]
pub enum FieldValue<'a> {
    /// A scalar text field; `None` when absent
    Text(Option<Cow<'a, str>>),
    /// Date sub-records
    Dates(&'a [Date]),
    /// Extent sub-records
    Extents(&'a [Extent]),
    /// Note sub-records
    Notes(&'a [Note]),
    /// Resolved subjects
    Subjects(&'a [Resolved<Subject>]),
    /// Resolved agent links
    Agents(&'a [LinkedAgent]),
    /// Instances
    Instances(&'a [Instance]),
}

impl<'a> FieldValue<'a> {
    fn extract(record: &'a SourceRecord, field: SourceField) -> Self {
        match field {
            SourceField::Title => FieldValue::Text(Some(Cow::Borrowed(record.title.as_str()))),
            SourceField::Uri => FieldValue::Text(record.uri.as_deref().map(Cow::Borrowed)),
            SourceField::ComponentId => FieldValue::Text(record.local_identifier().map(Cow::Owned)),
            SourceField::Language => FieldValue::Text(record.language.as_deref().map(Cow::Borrowed)),
            SourceField::Dates => FieldValue::Dates(&record.dates),
            SourceField::Extents => FieldValue::Extents(&record.extents),
            SourceField::Notes => FieldValue::Notes(&record.notes),
            SourceField::Subjects => FieldValue::Subjects(&record.subjects),
            SourceField::LinkedAgents => FieldValue::Agents(&record.linked_agents),
            SourceField::Instances => FieldValue::Instances(&record.instances),
        }
    }
}

/// The values selected by one field-map entry.
#[derive(Debug, Clone)]
pub struct FieldValues<'a> {
    record_id: &'a str,
    values: Vec<(SourceField, FieldValue<'a>)>,
}

macro_rules! slice_accessor {
    ($(#[$doc:meta])* $name:ident, $field:ident, $variant:ident, $ty:ty) => {
        $(#[$doc])*
        ///
        /// # Errors
        ///
        /// Returns [`ExportError::Mapping`] if the field map entry did not
        /// select this field.
        pub fn $name(&self) -> Result<&'a [$ty]> {
            match self.find(SourceField::$field)? {
                FieldValue::$variant(values) => Ok(values),
                _ => Err(self.error(SourceField::$field.name(), "unexpected value kind")),
            }
        }
    };
}

impl<'a> FieldValues<'a> {
    /// Extract `fields` from `record`, in the given order.
    #[must_use]
    pub fn extract(record: &'a SourceRecord, fields: &[SourceField], record_id: &'a str) -> Self {
        let values = fields
            .iter()
            .map(|&field| (field, FieldValue::extract(record, field)))
            .collect();
        FieldValues { record_id, values }
    }

    /// Identifier of the record being mapped.
    #[must_use]
    pub fn record_id(&self) -> &str {
        self.record_id
    }

    /// Build a mapping error for `field` of the current record.
    #[must_use]
    pub fn error(&self, field: &'static str, reason: impl Into<String>) -> ExportError {
        ExportError::Mapping {
            field,
            record: self.record_id.to_string(),
            reason: reason.into(),
        }
    }

    fn find(&self, field: SourceField) -> Result<&FieldValue<'a>> {
        self.values
            .iter()
            .find(|(selected, _)| *selected == field)
            .map(|(_, value)| value)
            .ok_or_else(|| self.error(field.name(), "field not selected by the field map"))
    }

    /// A scalar text field; `Ok(None)` when the field is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Mapping`] if the field map entry did not select
    /// `field` or `field` is not a text field.
    pub fn text(&self, field: SourceField) -> Result<Option<&str>> {
        match self.find(field)? {
            FieldValue::Text(value) => Ok(value.as_deref()),
            _ => Err(self.error(field.name(), "not a text field")),
        }
    }

    slice_accessor!(
        /// The record's dates.
        dates, Dates, Dates, Date
    );
    slice_accessor!(
        /// The record's extents.
        extents, Extents, Extents, Extent
    );
    slice_accessor!(
        /// The record's notes.
        notes, Notes, Notes, Note
    );
    slice_accessor!(
        /// The record's resolved subjects.
        subjects, Subjects, Subjects, Resolved<Subject>
    );
    slice_accessor!(
        /// The record's resolved agent links.
        linked_agents, LinkedAgents, Agents, LinkedAgent
    );
    slice_accessor!(
        /// The record's instances.
        instances, Instances, Instances, Instance
    );
}

/// A field handler: consumes extracted values and mutates the model.
pub type Handler<M> = fn(&mut M, &FieldValues<'_>, &ExportConfig) -> Result<()>;

/// One entry of a field map.
pub struct FieldMapping<M> {
    /// Source fields passed to the handler, in order
    pub fields: &'static [SourceField],
    /// Handler invoked with the extracted values
    pub handler: Handler<M>,
}

impl<M> FieldMapping<M> {
    /// Create a field map entry.
    #[must_use]
    pub const fn new(fields: &'static [SourceField], handler: Handler<M>) -> Self {
        FieldMapping { fields, handler }
    }
}

impl<M> fmt::Debug for FieldMapping<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}

/// Apply a field map to `model`, reading from `record`.
///
/// # Errors
///
/// Returns the first error raised by a handler; later entries are not run.
pub fn apply_map<M>(
    model: &mut M,
    record: &SourceRecord,
    map: &[FieldMapping<M>],
    config: &ExportConfig,
) -> Result<()> {
    let record_id = record.display_id();
    for mapping in map {
        trace!(record = %record_id, fields = ?mapping.fields, "applying field map entry");
        let values = FieldValues::extract(record, mapping.fields, &record_id);
        (mapping.handler)(model, &values, config)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Trace {
        calls: Vec<String>,
    }

    fn record_title(model: &mut Trace, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
        let title = values.text(SourceField::Title)?.unwrap_or_default();
        model.calls.push(format!("title:{title}"));
        Ok(())
    }

    fn record_uri(model: &mut Trace, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
        let uri = values.text(SourceField::Uri)?;
        model.calls.push(format!("uri:{uri:?}"));
        Ok(())
    }

    fn record_dates(model: &mut Trace, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
        model.calls.push(format!("dates:{}", values.dates()?.len()));
        Ok(())
    }

    fn fail(_: &mut Trace, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
        Err(values.error("linked_agents", "broken"))
    }

    fn wrong_field(_: &mut Trace, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
        values.notes().map(|_| ())
    }

    #[test]
    fn test_entries_run_in_order() {
        let map: &[FieldMapping<Trace>] = &[
            FieldMapping::new(&[SourceField::Uri], record_uri),
            FieldMapping::new(&[SourceField::Title, SourceField::Dates], record_title),
            FieldMapping::new(&[SourceField::Dates], record_dates),
        ];
        let record = SourceRecord {
            title: "Box 1".to_string(),
            ..SourceRecord::default()
        };
        let mut trace = Trace::default();
        apply_map(&mut trace, &record, map, &ExportConfig::default()).unwrap();

        // The absent uri still reaches its handler.
        assert_eq!(trace.calls, vec!["uri:None", "title:Box 1", "dates:0"]);
    }

    #[test]
    fn test_handler_error_stops_the_map() {
        let map: &[FieldMapping<Trace>] = &[
            FieldMapping::new(&[SourceField::LinkedAgents], fail),
            FieldMapping::new(&[SourceField::Title], record_title),
        ];
        let record = SourceRecord {
            uri: Some("/repositories/2/archival_objects/9".to_string()),
            ..SourceRecord::default()
        };
        let mut trace = Trace::default();
        let err = apply_map(&mut trace, &record, map, &ExportConfig::default()).unwrap_err();

        match err {
            ExportError::Mapping { field, record, .. } => {
                assert_eq!(field, "linked_agents");
                assert_eq!(record, "/repositories/2/archival_objects/9");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(trace.calls.is_empty());
    }

    #[test]
    fn test_unselected_field_is_an_error() {
        let map: &[FieldMapping<Trace>] = &[FieldMapping::new(&[SourceField::Title], wrong_field)];
        let mut trace = Trace::default();
        let err = apply_map(
            &mut trace,
            &SourceRecord::default(),
            map,
            &ExportConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("notes"));
    }
}
