//! Common test helpers and utilities shared across test suite.

#![allow(dead_code)]

use aspace_mods::source::{
    Agent, AgentName, AgentType, Date, DateLabel, DigitalObject, Extent, FileVersion, Instance,
    LinkedAgent, Note, Resolved, Subject, Term, UserDefined,
};
use aspace_mods::{ExportConfig, SourceRecord};

/// Installs a test-writer subscriber once; filter with `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

/// Compact configuration: no indentation and no XML declaration.
pub fn compact_config() -> ExportConfig {
    ExportConfig::new()
        .with_indent(None)
        .with_xml_declaration(false)
        .with_pretty_json(false)
}

/// Loads a JSON fixture from `tests/data`.
pub fn load_fixture(name: &str) -> SourceRecord {
    let path = format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"));
    let json = std::fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {path}"));
    SourceRecord::from_json(&json).unwrap_or_else(|e| panic!("Invalid fixture {path}: {e}"))
}

/// Creates a bare archival object with a title and component id.
pub fn create_test_record(title: &str) -> SourceRecord {
    SourceRecord {
        title: title.to_string(),
        uri: Some("/repositories/2/archival_objects/101".to_string()),
        component_id: Some("MS 1-101".to_string()),
        ..SourceRecord::default()
    }
}

/// A date with an expression.
pub fn expression_date(label: DateLabel, expression: &str) -> Date {
    Date {
        label,
        expression: Some(expression.to_string()),
        ..Date::default()
    }
}

/// A date with a structured range and no expression.
pub fn range_date(label: DateLabel, begin: &str, end: Option<&str>) -> Date {
    Date {
        label,
        begin: Some(begin.to_string()),
        end: end.map(str::to_string),
        ..Date::default()
    }
}

/// An extent without notes.
pub fn extent(number: &str, extent_type: &str, portion: Option<&str>) -> Extent {
    Extent {
        number: number.to_string(),
        extent_type: extent_type.to_string(),
        portion: portion.map(str::to_string),
        ..Extent::default()
    }
}

/// A single-part note.
pub fn note(note_type: &str, content: &str, publish: bool) -> Note {
    Note {
        note_type: note_type.to_string(),
        content: vec![content.to_string()],
        publish,
        ..Note::default()
    }
}

/// A resolved subject from `(term, term_type)` pairs.
pub fn subject(source: &str, terms: &[(&str, &str)]) -> Resolved<Subject> {
    Resolved::new(Subject {
        source: Some(source.to_string()),
        terms: terms
            .iter()
            .map(|(term, term_type)| Term {
                term: (*term).to_string(),
                term_type: (*term_type).to_string(),
            })
            .collect(),
        authority_id: None,
    })
}

/// A person name with only a primary name.
pub fn person_name(primary_name: &str) -> AgentName {
    AgentName {
        primary_name: Some(primary_name.to_string()),
        sort_name: Some(primary_name.to_string()),
        source: Some("local".to_string()),
        ..AgentName::default()
    }
}

/// A linked agent whose display name is its first name form.
pub fn linked_agent(role: &str, agent_type: AgentType, names: Vec<AgentName>) -> LinkedAgent {
    LinkedAgent {
        role: role.to_string(),
        reference: None,
        agent: Agent {
            agent_type,
            title: names.first().and_then(|n| n.sort_name.clone()),
            display_name: names.first().cloned(),
            names,
        },
    }
}

/// A representative digital object instance.
pub fn digital_object(classification: Option<&str>, files: &[(&str, Option<&str>)]) -> Instance {
    Instance {
        instance_type: "digital_object".to_string(),
        is_representative: true,
        digital_object: Some(Resolved::new(DigitalObject {
            file_versions: files
                .iter()
                .map(|(uri, format)| FileVersion {
                    file_uri: (*uri).to_string(),
                    file_format_name: format.map(str::to_string),
                    caption: None,
                })
                .collect(),
            user_defined: classification.map(|code| UserDefined {
                enum_2: Some(code.to_string()),
            }),
        })),
    }
}
