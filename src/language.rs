//! Language label lookup.
//!
//! The export stores a language as a display label plus its ISO 639-2/B code.
//! Labels come from a [`LanguageResolver`]; hosts with their own localization
//! plug one in, everyone else gets the built-in [`Iso639Table`].

use indexmap::IndexMap;
use lazy_static::lazy_static;

/// Resolves an ISO 639-2/B code to a human-readable language name.
pub trait LanguageResolver: Send + Sync {
    /// The display label for `code`, or `None` if the code is unknown.
    fn label(&self, code: &str) -> Option<String>;
}

lazy_static! {
    static ref ISO_639_2B: IndexMap<&'static str, &'static str> = IndexMap::from([
        ("ara", "Arabic"),
        ("chi", "Chinese"),
        ("cze", "Czech"),
        ("dan", "Danish"),
        ("dut", "Dutch; Flemish"),
        ("eng", "English"),
        ("fin", "Finnish"),
        ("fre", "French"),
        ("ger", "German"),
        ("gre", "Greek, Modern (1453-)"),
        ("grc", "Greek, Ancient (to 1453)"),
        ("heb", "Hebrew"),
        ("hun", "Hungarian"),
        ("ita", "Italian"),
        ("jpn", "Japanese"),
        ("kor", "Korean"),
        ("lat", "Latin"),
        ("mul", "Multiple languages"),
        ("nor", "Norwegian"),
        ("pol", "Polish"),
        ("por", "Portuguese"),
        ("rus", "Russian"),
        ("spa", "Spanish; Castilian"),
        ("swe", "Swedish"),
        ("tur", "Turkish"),
        ("ukr", "Ukrainian"),
        ("und", "Undetermined"),
        ("wel", "Welsh"),
        ("yid", "Yiddish"),
        ("zxx", "No linguistic content"),
    ]);
}

/// Built-in ISO 639-2/B table covering commonly described languages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Iso639Table;

impl LanguageResolver for Iso639Table {
    fn label(&self, code: &str) -> Option<String> {
        ISO_639_2B.get(code).map(|label| (*label).to_string())
    }
}

/// A resolver backed by a caller-supplied table.
#[derive(Debug, Clone, Default)]
pub struct LanguageTable {
    labels: IndexMap<String, String>,
}

impl LanguageTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the label for a code.
    #[must_use]
    pub fn with(mut self, code: impl Into<String>, label: impl Into<String>) -> Self {
        self.labels.insert(code.into(), label.into());
        self
    }
}

impl LanguageResolver for LanguageTable {
    fn label(&self, code: &str) -> Option<String> {
        self.labels.get(code).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table() {
        assert_eq!(Iso639Table.label("eng").as_deref(), Some("English"));
        assert_eq!(Iso639Table.label("fre").as_deref(), Some("French"));
        assert_eq!(Iso639Table.label("xyz"), None);
    }

    #[test]
    fn test_custom_table() {
        let table = LanguageTable::new().with("eng", "Anglais");
        assert_eq!(table.label("eng").as_deref(), Some("Anglais"));
        assert_eq!(table.label("fre"), None);
    }
}
