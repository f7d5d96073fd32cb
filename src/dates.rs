//! Date normalization.
//!
//! Turns one source [`Date`] into a [`NormalizedDate`] that both serializers
//! render from. A free-text expression wins over the structured range: when
//! one is present the begin/end points are not exposed.

use crate::source::{non_empty, Date, DateLabel};

/// Encoding used for structured date points.
pub const W3CDTF: &str = "w3cdtf";

/// Classification of a date by its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateKind {
    /// `creation`
    Created,
    /// `digitized`
    Captured,
    /// `copyright`
    Copyright,
    /// `modified`
    Modified,
    /// `issued`, `broadcast` and `publication`
    Issued,
    /// Everything else
    Other,
}

impl DateKind {
    /// Classify a date label.
    #[must_use]
    pub const fn from_label(label: DateLabel) -> Self {
        match label {
            DateLabel::Creation => Self::Created,
            DateLabel::Digitized => Self::Captured,
            DateLabel::Copyright => Self::Copyright,
            DateLabel::Modified => Self::Modified,
            DateLabel::Issued | DateLabel::Broadcast | DateLabel::Publication => Self::Issued,
            DateLabel::Other => Self::Other,
        }
    }

    /// Date `type` in the JSON summary.
    #[must_use]
    pub const fn summary_type(self) -> &'static str {
        match self {
            Self::Created => "creation",
            Self::Captured => "digitized",
            Self::Copyright => "copyright",
            Self::Modified => "modified",
            Self::Issued => "issued",
            Self::Other => "other",
        }
    }

    /// MODS element name inside `originInfo`.
    #[must_use]
    pub const fn mods_tag(self) -> &'static str {
        match self {
            Self::Created => "dateCreated",
            Self::Captured => "dateCaptured",
            Self::Copyright => "copyrightDate",
            Self::Modified => "dateModified",
            Self::Issued => "dateIssued",
            Self::Other => "dateOther",
        }
    }
}

/// A date ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedDate {
    /// Classified date type
    pub kind: DateKind,
    /// Display text: the expression, or `begin[-end]`
    pub text: String,
    /// Whether a non-empty expression was given
    pub has_expression: bool,
    /// Start point, only when there is no expression
    pub begin: Option<String>,
    /// End point, only when there is no expression
    pub end: Option<String>,
    /// MODS qualifier derived from the certainty
    pub qualifier: Option<&'static str>,
}

impl NormalizedDate {
    /// Whether the date has structured points to emit.
    #[must_use]
    pub fn has_points(&self) -> bool {
        self.begin.is_some() || self.end.is_some()
    }
}

/// Normalize a source date.
#[must_use]
pub fn normalize(date: &Date) -> NormalizedDate {
    let expression = non_empty(date.expression.as_deref());
    let has_expression = expression.is_some();

    let begin = non_empty(date.begin.as_deref()).filter(|_| !has_expression);
    let end = non_empty(date.end.as_deref()).filter(|_| !has_expression);

    let text = match (expression, end) {
        (Some(expression), _) => expression.to_string(),
        (None, Some(end)) => format!("{}-{end}", begin.unwrap_or_default()),
        (None, None) => begin.unwrap_or_default().to_string(),
    };

    NormalizedDate {
        kind: DateKind::from_label(date.label),
        text,
        has_expression,
        begin: begin.map(str::to_string),
        end: end.map(str::to_string),
        qualifier: date.certainty.and_then(|c| c.qualifier()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Certainty;

    fn date(label: DateLabel, begin: Option<&str>, end: Option<&str>, expr: Option<&str>) -> Date {
        Date {
            label,
            begin: begin.map(str::to_string),
            end: end.map(str::to_string),
            expression: expr.map(str::to_string),
            certainty: None,
        }
    }

    #[test]
    fn test_range_without_expression() {
        let n = normalize(&date(DateLabel::Creation, Some("1990"), Some("1995"), None));
        assert_eq!(n.text, "1990-1995");
        assert_eq!(n.begin.as_deref(), Some("1990"));
        assert_eq!(n.end.as_deref(), Some("1995"));
        assert!(!n.has_expression);
        assert_eq!(n.kind.summary_type(), "creation");
        assert_eq!(n.kind.mods_tag(), "dateCreated");
    }

    #[test]
    fn test_expression_hides_points() {
        let n = normalize(&date(
            DateLabel::Creation,
            Some("1990"),
            Some("1995"),
            Some("early 1990s"),
        ));
        assert_eq!(n.text, "early 1990s");
        assert!(n.has_expression);
        assert!(!n.has_points());
    }

    #[test]
    fn test_empty_expression_is_ignored() {
        let n = normalize(&date(DateLabel::Creation, Some("1990"), None, Some("")));
        assert!(!n.has_expression);
        assert_eq!(n.text, "1990");
    }

    #[test]
    fn test_end_without_begin_is_kept() {
        let n = normalize(&date(DateLabel::Other, None, Some("1995"), None));
        assert_eq!(n.begin, None);
        assert_eq!(n.end.as_deref(), Some("1995"));
        assert_eq!(n.text, "-1995");
        assert!(n.has_points());
    }

    #[test]
    fn test_label_classification() {
        assert_eq!(DateKind::from_label(DateLabel::Digitized).mods_tag(), "dateCaptured");
        assert_eq!(DateKind::from_label(DateLabel::Copyright).mods_tag(), "copyrightDate");
        assert_eq!(DateKind::from_label(DateLabel::Modified).summary_type(), "modified");
        assert_eq!(DateKind::from_label(DateLabel::Broadcast).mods_tag(), "dateIssued");
        assert_eq!(DateKind::from_label(DateLabel::Publication).summary_type(), "issued");
        assert_eq!(DateKind::from_label(DateLabel::Other).mods_tag(), "dateOther");
    }

    #[test]
    fn test_qualifier_from_certainty() {
        let mut d = date(DateLabel::Creation, Some("1900"), None, None);
        d.certainty = Some(Certainty::Questionable);
        assert_eq!(normalize(&d).qualifier, Some("questionable"));

        d.certainty = Some(Certainty::Unspecified);
        assert_eq!(normalize(&d).qualifier, None);
    }
}
