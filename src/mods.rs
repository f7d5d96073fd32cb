//! MODS 3.4 serialization.
//!
//! Converts an [`ExportModel`] into a MODS XML document. The document is
//! built as an [`XmlNode`] tree in a fixed element order and rendered by
//! [`crate::xml::render`]; empty sections are dropped by the node rules
//! rather than checked here.
//!
//! # Examples
//!
//! ```
//! use aspace_mods::{record_to_mods_xml, ExportConfig, SourceRecord};
//!
//! let record = SourceRecord {
//!     title: "Field notebooks".to_string(),
//!     component_id: Some("MS 12".to_string()),
//!     language: Some("eng".to_string()),
//!     ..SourceRecord::default()
//! };
//!
//! let config = ExportConfig::new().with_indent(None).with_xml_declaration(false);
//! let xml = record_to_mods_xml(&record, &config)?;
//! assert!(xml.starts_with("<mods xmlns=\"http://www.loc.gov/mods/v3\" version=\"3.4\">"));
//! assert!(xml.contains("<identifier type=\"local\">MS 12</identifier>"));
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use crate::config::ExportConfig;
use crate::dates::{self, NormalizedDate, W3CDTF};
use crate::error::Result;
use crate::model::{ExportModel, ModelName, ModelNote, ModelSubject, Part, SubjectTerm};
use crate::source::SourceRecord;
use crate::xml::{self, XmlNode};

/// MODS namespace URI.
pub const MODS_NAMESPACE: &str = "http://www.loc.gov/mods/v3";

/// MODS schema version written on the root element.
pub const MODS_VERSION: &str = "3.4";

const LANGUAGE_AUTHORITY: &str = "iso639-2b";
const ROLE_AUTHORITY: &str = "marcrelator";

/// Serialize a model to a MODS XML string.
///
/// # Errors
///
/// Returns [`crate::ExportError::Xml`] if the XML writer fails.
pub fn model_to_mods_xml(model: &ExportModel, config: &ExportConfig) -> Result<String> {
    xml::render(&mods_tree(model), config.indent, config.xml_declaration)
}

/// Map a record with the MODS variant and serialize it.
///
/// # Errors
///
/// Returns [`crate::ExportError::Mapping`] for malformed source fields and
/// [`crate::ExportError::Xml`] if the XML writer fails.
pub fn record_to_mods_xml(record: &SourceRecord, config: &ExportConfig) -> Result<String> {
    let model = ExportModel::mods(record, config)?;
    model_to_mods_xml(&model, config)
}

/// Build the MODS document tree for a model.
#[must_use]
pub fn mods_tree(model: &ExportModel) -> XmlNode {
    XmlNode::required("mods")
        .attr("xmlns", MODS_NAMESPACE)
        .attr("version", MODS_VERSION)
        .child(XmlNode::element("titleInfo").child(XmlNode::element("title").text(model.title.as_str())))
        .child(
            XmlNode::element("identifier")
                .attr("type", "local")
                .opt_text(model.local_identifier.as_deref()),
        )
        .child(language(model))
        .child(XmlNode::element("typeOfResource").opt_text(model.type_of_resource.as_deref()))
        .child(origin_info(model))
        .child(physical_description(model))
        .children(model.notes.iter().map(general_note))
        .children(model.repository_note.iter().map(|note| {
            XmlNode::element("note")
                .attr("displayLabel", note.label.as_str())
                .text(note.content.as_str())
        }))
        .children(model.subjects.iter().map(subject))
        .children(model.names.iter().map(name))
        .children(model.parts.iter().map(part))
}

fn language(model: &ExportModel) -> XmlNode {
    let term = |term_type: &'static str, value: &str| {
        XmlNode::element("languageTerm")
            .attr("type", term_type)
            .attr("authority", LANGUAGE_AUTHORITY)
            .text(value)
    };

    let node = XmlNode::element("language");
    match &model.language {
        Some(lang) => node
            .child(term("text", &lang.label))
            .child(term("code", &lang.code)),
        None => node,
    }
}

fn origin_info(model: &ExportModel) -> XmlNode {
    XmlNode::element("originInfo").children(
        model
            .dates
            .iter()
            .map(dates::normalize)
            .flat_map(|date| date_elements(&date)),
    )
}

fn date_elements(date: &NormalizedDate) -> Vec<XmlNode> {
    let tag = date.kind.mods_tag();
    if date.has_expression {
        return vec![XmlNode::element(tag)
            .opt_attr("qualifier", date.qualifier)
            .text(date.text.as_str())];
    }

    let point = |name: &'static str, value: &str| {
        XmlNode::element(tag)
            .opt_attr("qualifier", date.qualifier)
            .attr("encoding", W3CDTF)
            .attr("keyDate", "yes")
            .attr("point", name)
            .text(value)
    };

    let mut nodes = Vec::with_capacity(2);
    if let Some(begin) = &date.begin {
        nodes.push(point("start", begin));
    }
    if let Some(end) = &date.end {
        nodes.push(point("end", end));
    }
    nodes
}

fn physical_description(model: &ExportModel) -> XmlNode {
    XmlNode::required("physicalDescription")
        .children(
            model
                .extents
                .iter()
                .map(|extent| XmlNode::element("extent").text(extent.as_str())),
        )
        .children(model.extent_notes.iter().map(note))
        .child(XmlNode::element("digitalOrigin").text(model.digital_origin.as_str()))
}

fn note(note: &ModelNote) -> XmlNode {
    XmlNode::element(note.tag)
        .opt_attr("type", note.note_type.as_deref())
        .opt_attr("displayLabel", note.label.as_deref())
        .text(note.content.as_str())
}

fn general_note(model_note: &ModelNote) -> XmlNode {
    match model_note.wrapping_tag.as_deref() {
        Some(wrapper) if !wrapper.is_empty() => XmlNode::element(wrapper).child(note(model_note)),
        _ => note(model_note),
    }
}

fn subject(subject: &ModelSubject) -> XmlNode {
    XmlNode::element("subject")
        .opt_attr("authority", subject.source.as_deref())
        .opt_attr("authorityURI", subject.authority_id.as_deref())
        .children(subject.terms.iter().map(subject_term))
}

fn subject_term(term: &SubjectTerm) -> XmlNode {
    let text = term.term.as_str();
    match term.term_type.as_str() {
        "geographic" => XmlNode::element("geographic").text(text),
        "temporal" => XmlNode::element("temporal").text(text),
        "uniformTitle" | "uniform_title" => {
            XmlNode::element("titleInfo").child(XmlNode::element("title").text(text))
        }
        "genre_form" => XmlNode::element("genre").text(text),
        "occupation" => XmlNode::element("occupation").text(text),
        _ => XmlNode::element("topic").text(text),
    }
}

fn name(model_name: &ModelName) -> XmlNode {
    let node = XmlNode::element("name")
        .opt_attr("type", model_name.name_type.as_deref())
        .opt_attr("authority", model_name.source.as_deref())
        .children(model_name.parts.iter().map(|part| {
            XmlNode::element("namePart")
                .opt_attr("type", part.part_type)
                .text(part.content.as_str())
        }));

    if model_name.is_subject() {
        return XmlNode::element("subject").child(node);
    }

    node.child(
        XmlNode::element("role").child(
            XmlNode::element("roleTerm")
                .attr("type", "text")
                .attr("authority", ROLE_AUTHORITY)
                .text(model_name.role.as_str()),
        ),
    )
}

fn part(part: &Part) -> XmlNode {
    XmlNode::element("part")
        .opt_attr("type", part.mime_type)
        .attr("order", part.order.to_string())
        .child(
            XmlNode::element("detail")
                .child(XmlNode::element("title").text(part.file_uri.as_str()))
                .child(XmlNode::element("caption").opt_text(part.caption.as_deref())),
        )
}
