//! Report models
//!
//! The canonical shape the model is asked to produce. The upstream reply is
//! untyped free text, so on the wire the parsed report is passed through as
//! an untyped JSON map; these types document the target schema and build
//! the synthesized fallback. Consumers must not assume any key beyond
//! `severity` is present.

use serde::{Deserialize, Serialize};

/// Severity rubric levels requested from the model.
pub const SEVERITY_LIGHT: &str = "light";
pub const SEVERITY_MODERATE: &str = "moderate";
pub const SEVERITY_SEVERE: &str = "severe";
/// Sentinel used when the reply could not be parsed.
pub const SEVERITY_INDETERMINATE: &str = "cannot be determined";

/// One damaged or possibly affected part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixingListItem {
    /// Part or tool name.
    #[serde(default)]
    pub tool: Option<String>,
    /// Damage detail, or the reason the part needs inspection.
    #[serde(default)]
    pub detail: Option<String>,
    /// "needs repair", "needs replacement", or "needs further inspection".
    #[serde(default)]
    pub status: Option<String>,
}

/// Structured damage assessment for one accident photo.
///
/// Every field except `severity` is optional; the model decides what it can
/// determine from the image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccidentReport {
    pub severity: String,
    /// Vehicle make and model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendations: Option<String>,
    /// Estimated repair cost; the model emits this as a number or a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fixinglist: Vec<FixingListItem>,
    /// Raw model reply, attached when no JSON object was found in it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    /// Parser error message, attached when a JSON-looking span failed to parse.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AccidentReport {
    /// Synthesized report for replies that could not be parsed as JSON.
    /// Exactly one of `raw_response` / `error` carries the diagnostic.
    pub fn indeterminate(raw_response: Option<String>, error: Option<String>) -> Self {
        Self {
            severity: SEVERITY_INDETERMINATE.to_string(),
            models: None,
            description: Some("analysis unclear".to_string()),
            recommendations: Some("recommend expert inspection".to_string()),
            price: None,
            fixinglist: Vec::new(),
            raw_response,
            error,
        }
    }
}
