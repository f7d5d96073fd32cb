//! Configuration options for the export.
//!
//! This module provides the [`ExportConfig`] struct which controls how source
//! records are mapped and how the resulting documents are rendered.

use std::fmt;
use std::sync::Arc;

use crate::language::{Iso639Table, LanguageResolver};

/// Repository-level note appended to every MODS document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryNote {
    /// Value of the `displayLabel` attribute
    pub label: String,
    /// Note text
    pub content: String,
}

impl RepositoryNote {
    /// Create a repository note.
    pub fn new(label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Configuration for an export.
///
/// # Examples
///
/// ```
/// use aspace_mods::{ExportConfig, RepositoryNote};
///
/// // Default configuration (indented XML, pretty JSON, built-in language table)
/// let config = ExportConfig::default();
///
/// // Compact XML with a repository note
/// let config = ExportConfig::new()
///     .with_indent(None)
///     .with_repository_note(RepositoryNote::new("Repository", "Special Collections"));
/// assert!(config.indent.is_none());
/// ```
#[derive(Clone)]
pub struct ExportConfig {
    // === XML Output ===
    /// Indentation width for MODS output; `None` renders compact XML.
    pub indent: Option<usize>,

    /// Emit the `<?xml ...?>` declaration before the MODS root.
    pub xml_declaration: bool,

    // === JSON Output ===
    /// Pretty-print JSON strings.
    pub pretty_json: bool,

    // === Reserved MODS fields ===
    /// Repository note rendered as `note[@displayLabel]`.
    pub repository_note: Option<RepositoryNote>,

    /// Value of `typeOfResource`.
    pub type_of_resource: Option<String>,

    // === Collaborators ===
    /// Resolves language codes to display labels.
    pub language_resolver: Arc<dyn LanguageResolver>,
}

impl fmt::Debug for ExportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportConfig")
            .field("indent", &self.indent)
            .field("xml_declaration", &self.xml_declaration)
            .field("pretty_json", &self.pretty_json)
            .field("repository_note", &self.repository_note)
            .field("type_of_resource", &self.type_of_resource)
            .finish_non_exhaustive()
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: Some(2),
            xml_declaration: true,
            pretty_json: true,
            repository_note: None,
            type_of_resource: None,
            language_resolver: Arc::new(Iso639Table),
        }
    }
}

impl ExportConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the XML indentation width.
    #[must_use]
    pub const fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables the XML declaration.
    #[must_use]
    pub const fn with_xml_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }

    /// Enables or disables pretty-printed JSON.
    #[must_use]
    pub const fn with_pretty_json(mut self, enabled: bool) -> Self {
        self.pretty_json = enabled;
        self
    }

    /// Sets the repository note.
    #[must_use]
    pub fn with_repository_note(mut self, note: RepositoryNote) -> Self {
        self.repository_note = Some(note);
        self
    }

    /// Sets the `typeOfResource` value.
    #[must_use]
    pub fn with_type_of_resource(mut self, value: impl Into<String>) -> Self {
        self.type_of_resource = Some(value.into());
        self
    }

    /// Sets the language resolver.
    #[must_use]
    pub fn with_language_resolver(mut self, resolver: impl LanguageResolver + 'static) -> Self {
        self.language_resolver = Arc::new(resolver);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::LanguageTable;

    #[test]
    fn test_default_config() {
        let config = ExportConfig::default();
        assert_eq!(config.indent, Some(2));
        assert!(config.xml_declaration);
        assert!(config.pretty_json);
        assert!(config.repository_note.is_none());
        assert!(config.type_of_resource.is_none());
        assert_eq!(
            config.language_resolver.label("eng").as_deref(),
            Some("English")
        );
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExportConfig::new()
            .with_indent(Some(4))
            .with_xml_declaration(false)
            .with_pretty_json(false)
            .with_type_of_resource("mixed material")
            .with_language_resolver(LanguageTable::new().with("eng", "Inglés"));

        assert_eq!(config.indent, Some(4));
        assert!(!config.xml_declaration);
        assert!(!config.pretty_json);
        assert_eq!(config.type_of_resource.as_deref(), Some("mixed material"));
        assert_eq!(
            config.language_resolver.label("eng").as_deref(),
            Some("Inglés")
        );
    }

    #[test]
    fn test_debug_omits_resolver() {
        let rendered = format!("{:?}", ExportConfig::default());
        assert!(rendered.contains("indent"));
        assert!(!rendered.contains("language_resolver"));
    }
}
