//! Support reason document and error definitions

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Template-specific error type
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("cannot parse the JSON template: {0}")]
    Invalid(#[source] serde_json::Error),

    #[error("cannot marshal the support reason to JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{[^}]+\}").expect("placeholder pattern"));

/// A limited support reason, loaded from a JSON template.
///
/// `summary` and `details` are the textual fields placeholder substitution
/// operates on; `detection_type` is carried through untouched. Absent fields
/// parse as empty and empty fields are omitted on serialization, so a
/// summary-only template round-trips to a summary-only document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportReason {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub details: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_type: Option<String>,
}

impl SupportReason {
    /// Parse a support reason from raw template bytes.
    pub fn parse(bytes: &[u8]) -> TemplateResult<Self> {
        serde_json::from_slice(bytes).map_err(TemplateError::Invalid)
    }

    /// Whether the literal token appears in any textual field.
    pub fn contains_placeholder(&self, token: &str) -> bool {
        self.summary.contains(token) || self.details.contains(token)
    }

    /// Replace every occurrence of the token across the textual fields.
    pub fn replace(&mut self, token: &str, value: &str) {
        self.summary = self.summary.replace(token, value);
        self.details = self.details.replace(token, value);
    }

    /// All `${NAME}` tokens still present in the textual fields.
    ///
    /// Substitution leaves placeholders without a matching parameter in
    /// place; callers list them here to warn before the document is sent.
    pub fn unresolved_placeholders(&self) -> Vec<String> {
        let mut tokens: Vec<String> = PLACEHOLDER
            .find_iter(&self.summary)
            .chain(PLACEHOLDER.find_iter(&self.details))
            .map(|m| m.as_str().to_string())
            .collect();
        tokens.dedup();
        tokens
    }

    /// Serialize to the canonical JSON byte form sent as the request body.
    pub fn serialize(&self) -> TemplateResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(TemplateError::Serialize)
    }

    /// Pretty-printed JSON for the preview shown before sending.
    pub fn to_pretty(&self) -> TemplateResult<String> {
        serde_json::to_string_pretty(self).map_err(TemplateError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_template() {
        let reason = SupportReason::parse(
            br#"{"summary":"Cluster degraded: ${REASON}","details":"See ${TICKET}","detection_type":"manual"}"#,
        )
        .unwrap();
        assert_eq!(reason.summary, "Cluster degraded: ${REASON}");
        assert_eq!(reason.details, "See ${TICKET}");
        assert_eq!(reason.detection_type.as_deref(), Some("manual"));
    }

    #[test]
    fn test_parse_tolerates_missing_and_unknown_fields() {
        let reason = SupportReason::parse(br#"{"summary":"s","extra":42}"#).unwrap();
        assert_eq!(reason.summary, "s");
        assert_eq!(reason.details, "");
        assert!(reason.detection_type.is_none());
    }

    #[test]
    fn test_parse_malformed_json() {
        assert!(matches!(
            SupportReason::parse(b"{not json"),
            Err(TemplateError::Invalid(_))
        ));
    }

    #[test]
    fn test_contains_placeholder_in_either_field() {
        let reason = SupportReason::parse(
            br#"{"summary":"${A} here","details":"and ${B} there"}"#,
        )
        .unwrap();
        assert!(reason.contains_placeholder("${A}"));
        assert!(reason.contains_placeholder("${B}"));
        assert!(!reason.contains_placeholder("${C}"));
    }

    #[test]
    fn test_replace_is_global_across_fields() {
        let mut reason = SupportReason::parse(
            br#"{"summary":"${X} and ${X}","details":"${X} again"}"#,
        )
        .unwrap();
        reason.replace("${X}", "y");
        assert_eq!(reason.summary, "y and y");
        assert_eq!(reason.details, "y again");
        assert!(reason.unresolved_placeholders().is_empty());
    }

    #[test]
    fn test_replace_leaves_auxiliary_metadata() {
        let mut reason = SupportReason::parse(
            br#"{"summary":"${MODE}","detection_type":"${MODE}"}"#,
        )
        .unwrap();
        reason.replace("${MODE}", "manual");
        assert_eq!(reason.summary, "manual");
        assert_eq!(reason.detection_type.as_deref(), Some("${MODE}"));
    }

    #[test]
    fn test_unresolved_placeholders_lists_leftover_tokens() {
        let reason = SupportReason::parse(
            br#"{"summary":"${A} ${B}","details":"${B}"}"#,
        )
        .unwrap();
        assert_eq!(reason.unresolved_placeholders(), vec!["${A}", "${B}"]);
    }

    #[test]
    fn test_serialize_omits_empty_fields() {
        let reason = SupportReason::parse(br#"{"summary":"only summary"}"#).unwrap();
        let bytes = reason.serialize().unwrap();
        assert_eq!(bytes, br#"{"summary":"only summary"}"#.to_vec());
    }

    #[test]
    fn test_serialize_round_trip() {
        let reason = SupportReason::parse(
            br#"{"summary":"s","details":"d","detection_type":"manual"}"#,
        )
        .unwrap();
        let reparsed = SupportReason::parse(&reason.serialize().unwrap()).unwrap();
        assert_eq!(reparsed.summary, "s");
        assert_eq!(reparsed.details, "d");
        assert_eq!(reparsed.detection_type.as_deref(), Some("manual"));
    }
}
