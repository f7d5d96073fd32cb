//! JSON summary serialization.
//!
//! The summary document is a fixed, ordered shape:
//!
//! ```text
//! {title, uri, identifiers, language?, dates?, extents?, subjects, notes, names, parts}
//! ```
//!
//! `language`, `dates` and `extents` are left out when the model has none;
//! the four trailing lists are always present. Key order is preserved
//! through `serde_json`'s `preserve_order` feature.
//!
//! # Examples
//!
//! ```
//! use aspace_mods::{record_to_json, ExportConfig, SourceRecord};
//!
//! let record = SourceRecord {
//!     title: "Scrapbook".to_string(),
//!     uri: Some("/repositories/2/archival_objects/7".to_string()),
//!     ..SourceRecord::default()
//! };
//!
//! let json = record_to_json(&record, &ExportConfig::default())?;
//! assert_eq!(json["title"], "Scrapbook");
//! assert_eq!(json["identifiers"][0]["type"], "local");
//! assert!(json.get("dates").is_none());
//! assert!(json["names"].as_array().unwrap().is_empty());
//! # Ok::<(), aspace_mods::ExportError>(())
//! ```

use serde::Serialize;
use serde_json::Value;

use crate::config::ExportConfig;
use crate::dates::{self, W3CDTF};
use crate::error::Result;
use crate::model::{ExportModel, ModelName, ModelNote, ModelSubject, Part};
use crate::source::SourceRecord;

#[derive(Serialize)]
struct SummaryDocument<'a> {
    title: &'a str,
    uri: Option<&'a str>,
    identifiers: [Identifier<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<Language<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dates: Option<Vec<SummaryDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    extents: Option<&'a [String]>,
    subjects: Vec<Subject<'a>>,
    notes: Vec<Note<'a>>,
    names: Vec<Name<'a>>,
    parts: Vec<SummaryPart<'a>>,
}

#[derive(Serialize)]
struct Identifier<'a> {
    #[serde(rename = "type")]
    id_type: &'static str,
    identifier: Option<&'a str>,
}

#[derive(Serialize)]
struct Language<'a> {
    text: &'a str,
    code: &'a str,
    authority: &'static str,
}

#[derive(Serialize)]
struct SummaryDate {
    #[serde(skip_serializing_if = "Option::is_none")]
    qualifier: Option<&'static str>,
    #[serde(rename = "type")]
    date_type: &'static str,
    expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    begin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    end: Option<String>,
    encoding: &'static str,
}

#[derive(Serialize)]
struct Term<'a> {
    #[serde(rename = "type")]
    term_type: &'a str,
    term: &'a str,
}

#[derive(Serialize)]
struct Subject<'a> {
    authority: Option<&'a str>,
    title: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    terms: Vec<Term<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authority_id: Option<&'a str>,
}

#[derive(Serialize)]
struct Note<'a> {
    #[serde(rename = "type")]
    note_type: Option<&'a str>,
    content: &'a str,
}

#[derive(Serialize)]
struct Name<'a> {
    title: Option<&'a str>,
    source: Option<&'a str>,
    #[serde(rename = "type")]
    name_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    authority_id: Option<&'a str>,
}

#[derive(Serialize)]
struct SummaryPart<'a> {
    #[serde(rename = "type")]
    mime_type: Option<&'static str>,
    order: String,
    title: &'a str,
    caption: Option<&'a str>,
}

impl<'a> SummaryDocument<'a> {
    fn from_model(model: &'a ExportModel) -> Self {
        SummaryDocument {
            title: &model.title,
            uri: model.uri.as_deref(),
            identifiers: [Identifier {
                id_type: "local",
                identifier: model.local_identifier.as_deref(),
            }],
            language: model.language.as_ref().map(|lang| Language {
                text: &lang.label,
                code: &lang.code,
                authority: "iso639-2b",
            }),
            dates: (!model.dates.is_empty()).then(|| {
                model
                    .dates
                    .iter()
                    .map(|date| {
                        let date = dates::normalize(date);
                        SummaryDate {
                            qualifier: date.qualifier,
                            date_type: date.kind.summary_type(),
                            expression: date.text,
                            begin: date.begin,
                            end: date.end,
                            encoding: W3CDTF,
                        }
                    })
                    .collect()
            }),
            extents: (!model.extents.is_empty()).then_some(model.extents.as_slice()),
            subjects: model.subjects.iter().map(Subject::from_model).collect(),
            notes: model.notes.iter().map(Note::from_model).collect(),
            names: model.names.iter().map(Name::from_model).collect(),
            parts: model.parts.iter().map(SummaryPart::from_model).collect(),
        }
    }
}

impl<'a> Subject<'a> {
    fn from_model(subject: &'a ModelSubject) -> Self {
        Subject {
            authority: subject.source.as_deref(),
            title: subject.title.as_deref(),
            terms: subject
                .terms
                .iter()
                .map(|t| Term {
                    term_type: &t.term_type,
                    term: &t.term,
                })
                .collect(),
            authority_id: subject.authority_id.as_deref(),
        }
    }
}

impl<'a> Note<'a> {
    fn from_model(note: &'a ModelNote) -> Self {
        Note {
            note_type: note.note_type.as_deref(),
            content: &note.content,
        }
    }
}

impl<'a> Name<'a> {
    fn from_model(name: &'a ModelName) -> Self {
        Name {
            title: name.title.as_deref(),
            source: name.source.as_deref(),
            name_type: name.name_type.as_deref(),
            authority_id: name.authority_id.as_deref(),
        }
    }
}

impl<'a> SummaryPart<'a> {
    fn from_model(part: &'a Part) -> Self {
        SummaryPart {
            mime_type: part.mime_type,
            order: part.order.to_string(),
            title: &part.file_uri,
            caption: part.caption.as_deref(),
        }
    }
}

/// Serialize a model to a JSON summary document.
///
/// # Errors
///
/// Returns [`crate::ExportError::Json`] if serialization fails.
pub fn model_to_json(model: &ExportModel) -> Result<Value> {
    Ok(serde_json::to_value(SummaryDocument::from_model(model))?)
}

/// Serialize a model to a JSON string, pretty-printed when
/// [`ExportConfig::pretty_json`] is set.
///
/// # Errors
///
/// Returns [`crate::ExportError::Json`] if serialization fails.
pub fn model_to_json_string(model: &ExportModel, config: &ExportConfig) -> Result<String> {
    let document = SummaryDocument::from_model(model);
    let json = if config.pretty_json {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(json)
}

/// Map a record with the summary variant and serialize it.
///
/// # Errors
///
/// Returns [`crate::ExportError::Mapping`] for malformed source fields and
/// [`crate::ExportError::Json`] if serialization fails.
pub fn record_to_json(record: &SourceRecord, config: &ExportConfig) -> Result<Value> {
    let model = ExportModel::summary(record, config)?;
    model_to_json(&model)
}

/// Map a record with the summary variant and serialize it to a string.
///
/// # Errors
///
/// Returns [`crate::ExportError::Mapping`] for malformed source fields and
/// [`crate::ExportError::Json`] if serialization fails.
pub fn record_to_json_string(record: &SourceRecord, config: &ExportConfig) -> Result<String> {
    let model = ExportModel::summary(record, config)?;
    model_to_json_string(&model, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LanguageTerm, SubjectTerm, Variant};
    use crate::source::{Certainty, Date, DateLabel};
    use serde_json::json;

    #[test]
    fn test_empty_model_shape() {
        let model = ExportModel::new(Variant::Summary);
        let json = model_to_json(&model).unwrap();
        assert_eq!(
            json,
            json!({
                "title": "",
                "uri": null,
                "identifiers": [{"type": "local", "identifier": null}],
                "subjects": [],
                "notes": [],
                "names": [],
                "parts": []
            })
        );
    }

    #[test]
    fn test_key_order() {
        let mut model = ExportModel::new(Variant::Summary);
        model.language = Some(LanguageTerm {
            label: "English".to_string(),
            code: "eng".to_string(),
        });
        model.extents = vec!["2 boxes".to_string()];
        model.dates = vec![Date {
            label: DateLabel::Creation,
            expression: Some("1900".to_string()),
            ..Date::default()
        }];
        let json = model_to_json(&model).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "title",
                "uri",
                "identifiers",
                "language",
                "dates",
                "extents",
                "subjects",
                "notes",
                "names",
                "parts"
            ]
        );
        assert_eq!(
            json["language"],
            json!({"text": "English", "code": "eng", "authority": "iso639-2b"})
        );
    }

    #[test]
    fn test_range_date() {
        let mut model = ExportModel::new(Variant::Summary);
        model.dates = vec![Date {
            label: DateLabel::Creation,
            begin: Some("1990".to_string()),
            end: Some("1995".to_string()),
            ..Date::default()
        }];
        let json = model_to_json(&model).unwrap();
        assert_eq!(
            json["dates"],
            json!([{
                "type": "creation",
                "expression": "1990-1995",
                "begin": "1990",
                "end": "1995",
                "encoding": "w3cdtf"
            }])
        );
    }

    #[test]
    fn test_expression_date_with_qualifier() {
        let mut model = ExportModel::new(Variant::Summary);
        model.dates = vec![Date {
            label: DateLabel::Broadcast,
            begin: Some("1950".to_string()),
            expression: Some("ca. 1950".to_string()),
            certainty: Some(Certainty::Approximate),
            ..Date::default()
        }];
        let json = model_to_json(&model).unwrap();
        assert_eq!(
            json["dates"][0],
            json!({
                "qualifier": "approximate",
                "type": "issued",
                "expression": "ca. 1950",
                "encoding": "w3cdtf"
            })
        );
    }

    #[test]
    fn test_subjects_names_and_parts() {
        let mut model = ExportModel::new(Variant::Summary);
        model.subjects = vec![
            ModelSubject {
                source: Some("lcsh".to_string()),
                terms: vec![SubjectTerm {
                    term: "Whaling".to_string(),
                    term_type: "topical".to_string(),
                }],
                title: Some("Whaling".to_string()),
                authority_id: None,
            },
            ModelSubject {
                source: None,
                terms: Vec::new(),
                title: Some("Acme Corp.".to_string()),
                authority_id: Some("n79021164".to_string()),
            },
        ];
        model.names = vec![ModelName {
            role: "creator".to_string(),
            name_type: Some("agent_person".to_string()),
            source: Some("naf".to_string()),
            title: Some("Smith, John".to_string()),
            ..ModelName::default()
        }];
        model.parts = vec![Part {
            mime_type: None,
            order: 1,
            file_uri: "http://example.org/a.tif".to_string(),
            caption: None,
        }];

        let json = model_to_json(&model).unwrap();
        assert_eq!(
            json["subjects"],
            json!([
                {
                    "authority": "lcsh",
                    "title": "Whaling",
                    "terms": [{"type": "topical", "term": "Whaling"}]
                },
                {"authority": null, "title": "Acme Corp.", "authority_id": "n79021164"}
            ])
        );
        assert_eq!(
            json["names"],
            json!([{"title": "Smith, John", "source": "naf", "type": "agent_person"}])
        );
        assert_eq!(
            json["parts"],
            json!([{"type": null, "order": "1", "title": "http://example.org/a.tif", "caption": null}])
        );
    }

    #[test]
    fn test_compact_string() {
        let model = ExportModel::new(Variant::Summary);
        let config = ExportConfig::new().with_pretty_json(false);
        let json = model_to_json_string(&model, &config).unwrap();
        assert!(json.starts_with("{\"title\":\"\",\"uri\":null,"));
        assert!(!json.contains('\n'));
    }
}
