//! Field handlers for [`ARCHIVAL_OBJECT_MAP`](crate::model::ARCHIVAL_OBJECT_MAP).
//!
//! Each handler reads the values selected by its map entry and fills part of
//! an [`ExportModel`]. Rules shared by both variants live in plain helpers;
//! where the variants genuinely differ the handler matches on
//! [`ExportModel::variant`].

use smallvec::SmallVec;
use tracing::debug;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::mapping::{FieldValues, SourceField};
use crate::model::{
    ExportModel, LanguageTerm, ModelName, ModelNote, ModelSubject, NamePart, Part, SubjectTerm,
    Variant,
};
use crate::source::{non_empty, AgentName, AgentType, DateLabel, Extent, LinkedAgent, Note};
use crate::vocab;

/// Title, with the expression of every creation date appended.
///
/// # Errors
///
/// Fails only if the map entry does not select `title` and `dates`.
pub fn title(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    let mut title = values.text(SourceField::Title)?.unwrap_or_default().to_string();
    for date in values.dates()? {
        if date.label != DateLabel::Creation {
            continue;
        }
        if let Some(expression) = non_empty(date.expression.as_deref()) {
            title.push_str(", ");
            title.push_str(expression);
        }
    }
    model.title = title;
    Ok(())
}

/// Record URI.
///
/// # Errors
///
/// Fails only if the map entry does not select `uri`.
pub fn uri(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    model.uri = values.text(SourceField::Uri)?.map(str::to_string);
    Ok(())
}

/// Local identifier.
///
/// # Errors
///
/// Fails only if the map entry does not select `component_id`.
pub fn local_identifier(
    model: &mut ExportModel,
    values: &FieldValues<'_>,
    _: &ExportConfig,
) -> Result<()> {
    model.local_identifier = values.text(SourceField::ComponentId)?.map(str::to_string);
    Ok(())
}

/// Language label and code. Unknown codes keep the code as their label.
///
/// # Errors
///
/// Fails only if the map entry does not select `language`.
pub fn language(model: &mut ExportModel, values: &FieldValues<'_>, config: &ExportConfig) -> Result<()> {
    model.language = non_empty(values.text(SourceField::Language)?).map(|code| {
        let label = config.language_resolver.label(code).unwrap_or_else(|| {
            debug!(code, "no label for language code");
            code.to_string()
        });
        LanguageTerm {
            label,
            code: code.to_string(),
        }
    });
    Ok(())
}

/// Dates, kept as-is for the serializers to normalize.
///
/// # Errors
///
/// Fails only if the map entry does not select `dates`.
pub fn dates(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    model.dates.extend(values.dates()?.iter().cloned());
    Ok(())
}

/// Extent statements and extent notes.
///
/// Extents with physical details or dimensions contribute an extent note
/// each; published `physdesc` and `dimensions` notes follow.
///
/// # Errors
///
/// Fails only if the map entry does not select `extents` and `notes`.
pub fn extents(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    let variant = model.variant;
    for extent in values.extents()? {
        model.extents.push(extent_statement(variant, extent));

        if let Some(details) = non_empty(extent.physical_details.as_deref()) {
            model
                .extent_notes
                .push(extent_note(variant, ExtentNoteKind::PhysicalDetails, details));
        }
        if let Some(dimensions) = non_empty(extent.dimensions.as_deref()) {
            model
                .extent_notes
                .push(extent_note(variant, ExtentNoteKind::Dimensions, dimensions));
        }
    }

    for note in published(values.notes()?).filter(|note| note.is_extent_note()) {
        let content = note.text();
        let routed = match (variant, note.note_type.as_str()) {
            (Variant::Mods, "physdesc") => {
                extent_note(variant, ExtentNoteKind::PhysicalDetails, &content)
            }
            (Variant::Mods, _) => extent_note(variant, ExtentNoteKind::Dimensions, &content),
            (Variant::Summary, note_type) => ModelNote::note(note_type, None, content),
        };
        model.extent_notes.push(routed);
    }
    Ok(())
}

/// Subject headings.
///
/// # Errors
///
/// Fails only if the map entry does not select `subjects`.
pub fn subjects(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    for subject in values.subjects()? {
        let subject = &subject.resolved;
        let terms: Vec<SubjectTerm> = subject
            .terms
            .iter()
            .map(|t| SubjectTerm {
                term: t.term.clone(),
                term_type: t.term_type.clone(),
            })
            .collect();

        let title = match model.variant {
            Variant::Summary => Some(
                terms
                    .iter()
                    .map(|t| t.term.as_str())
                    .collect::<Vec<_>>()
                    .join(" -- "),
            ),
            Variant::Mods => None,
        };

        model.subjects.push(ModelSubject {
            source: subject.source.clone(),
            terms,
            title,
            authority_id: non_empty(subject.authority_id.as_deref()).map(str::to_string),
        });
    }
    Ok(())
}

/// Linked agents.
///
/// The summary keeps one entry per agent, filing subject agents with the
/// subjects. MODS keeps one entry per name form, decomposed into name parts.
///
/// # Errors
///
/// Returns [`crate::ExportError::Mapping`] if an agent has no usable name.
pub fn agents(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    for link in values.linked_agents()? {
        match model.variant {
            Variant::Summary => summary_agent(model, values, link)?,
            Variant::Mods => mods_agent(model, values, link)?,
        }
    }
    Ok(())
}

/// General notes. Only published notes are kept; extent notes are handled by
/// [`extents`].
///
/// # Errors
///
/// Fails only if the map entry does not select `notes`.
pub fn notes(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    for note in published(values.notes()?).filter(|note| !note.is_extent_note()) {
        let routed = match model.variant {
            Variant::Summary => ModelNote::note(note.note_type.clone(), None, note.text()),
            Variant::Mods => mods_note(note),
        };
        model.notes.push(routed);
    }
    Ok(())
}

/// Parts from representative digital objects, plus the MODS digital origin.
///
/// # Errors
///
/// Returns [`crate::ExportError::Mapping`] if a digital object instance has no
/// embedded digital object.
pub fn instances(model: &mut ExportModel, values: &FieldValues<'_>, _: &ExportConfig) -> Result<()> {
    for instance in values.instances()? {
        if !instance.is_representative_digital_object() {
            continue;
        }
        let object = &instance
            .digital_object
            .as_ref()
            .ok_or_else(|| {
                values.error(
                    SourceField::Instances.name(),
                    "representative instance has no resolved digital object",
                )
            })?
            .resolved;

        if model.variant == Variant::Mods && model.digital_origin.is_empty() {
            if let Some(code) = object.classification() {
                match vocab::digital_origin(code) {
                    Some(origin) => model.digital_origin = origin.to_string(),
                    None => debug!(code, "no digital origin for classification"),
                }
            }
        }

        for (idx, file) in object.file_versions.iter().enumerate() {
            let format = non_empty(file.file_format_name.as_deref());
            let mime_type = format.and_then(vocab::mime_type);
            if let (Some(format), None) = (format, mime_type) {
                debug!(format, "no MIME type for file format");
            }
            model.parts.push(Part {
                mime_type,
                order: idx + 1,
                file_uri: file.file_uri.clone(),
                caption: non_empty(file.caption.as_deref()).map(str::to_string),
            });
        }
    }
    Ok(())
}

/// Decompose a name into its non-empty parts, in subtype field order.
#[must_use]
pub fn name_parts(name: &AgentName, agent_type: AgentType) -> SmallVec<[NamePart; 4]> {
    vocab::name_part_fields(agent_type)
        .iter()
        .filter_map(|&field| {
            name.field(field).map(|content| NamePart {
                part_type: vocab::name_part_type(field),
                content: content.to_string(),
            })
        })
        .collect()
}

fn published(notes: &[Note]) -> impl Iterator<Item = &Note> {
    notes.iter().filter(|note| note.publish)
}

fn extent_statement(variant: Variant, extent: &Extent) -> String {
    let number = extent.number.as_str();
    let extent_type = extent.extent_type.as_str();
    match (variant, non_empty(extent.portion.as_deref())) {
        (Variant::Mods, Some(portion)) => format!("{number} ({portion}) {extent_type}"),
        (Variant::Summary, Some(portion)) => format!("{number} {extent_type} ({portion})"),
        (_, None) => format!("{number} {extent_type}"),
    }
}

#[derive(Clone, Copy)]
enum ExtentNoteKind {
    PhysicalDetails,
    Dimensions,
}

fn extent_note(variant: Variant, kind: ExtentNoteKind, content: &str) -> ModelNote {
    match (variant, kind) {
        (Variant::Mods, ExtentNoteKind::PhysicalDetails) => ModelNote::note(
            "physical_description",
            Some("Physical Details".to_string()),
            content,
        ),
        (Variant::Mods, ExtentNoteKind::Dimensions) => {
            ModelNote::note("dimensions", Some("Dimensions".to_string()), content)
        }
        (Variant::Summary, ExtentNoteKind::PhysicalDetails) => {
            ModelNote::note("phystech", None, content)
        }
        (Variant::Summary, ExtentNoteKind::Dimensions) => {
            ModelNote::note("dimensions", None, content)
        }
    }
}

fn mods_note(note: &Note) -> ModelNote {
    let (tag, note_type) = match note.note_type.as_str() {
        "accessrestrict" => ("accessCondition", Some("restrictionOnAccess")),
        "userestrict" => ("accessCondition", Some("useAndReproduction")),
        "legalstatus" => ("accessCondition", Some("legalstatus")),
        "abstract" => ("abstract", None),
        other => ("note", Some(other)),
    };
    ModelNote {
        tag,
        note_type: note_type.filter(|t| !t.is_empty()).map(str::to_string),
        label: non_empty(note.label.as_deref()).map(str::to_string),
        content: note.text(),
        wrapping_tag: None,
    }
}

fn summary_agent(model: &mut ExportModel, values: &FieldValues<'_>, link: &LinkedAgent) -> Result<()> {
    let agent = &link.agent;
    let display = agent
        .display_name
        .as_ref()
        .or_else(|| agent.names.first())
        .ok_or_else(|| {
            values.error(SourceField::LinkedAgents.name(), "agent has no display name")
        })?;
    let title = non_empty(agent.title.as_deref())
        .or_else(|| non_empty(display.sort_name.as_deref()))
        .ok_or_else(|| values.error(SourceField::LinkedAgents.name(), "agent has no title"))?
        .to_string();
    let authority_id = non_empty(display.authority_id.as_deref()).map(str::to_string);

    if link.is_subject() {
        model.subjects.push(ModelSubject {
            source: display.source.clone(),
            terms: Vec::new(),
            title: Some(title),
            authority_id,
        });
    } else {
        model.names.push(ModelName {
            role: link.role.clone(),
            name_type: Some(agent.agent_type.as_str().to_string()),
            source: display.source.clone(),
            title: Some(title),
            authority_id,
            ..ModelName::default()
        });
    }
    Ok(())
}

fn mods_agent(model: &mut ExportModel, values: &FieldValues<'_>, link: &LinkedAgent) -> Result<()> {
    let agent = &link.agent;
    if agent.names.is_empty() {
        return Err(values.error(SourceField::LinkedAgents.name(), "agent has no names"));
    }

    let name_type = vocab::name_type(agent.agent_type);
    for name in &agent.names {
        let parts = name_parts(name, agent.agent_type);
        if parts.is_empty() {
            return Err(values.error(
                SourceField::LinkedAgents.name(),
                format!(
                    "{} name has none of its name fields",
                    agent.agent_type.as_str()
                ),
            ));
        }
        model.names.push(ModelName {
            role: link.role.clone(),
            name_type: name_type.map(str::to_string),
            source: non_empty(name.source.as_deref()).map(str::to_string),
            parts,
            display_form: non_empty(name.sort_name.as_deref()).map(str::to_string),
            ..ModelName::default()
        });
    }
    Ok(())
}
