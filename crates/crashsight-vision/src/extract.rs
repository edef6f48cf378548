//! Report extraction
//!
//! The model's reply is free text with no contractual format; often it is a
//! bare JSON object, sometimes it is wrapped in a markdown fence or in
//! prose. Extraction is deliberately permissive:
//!
//! 1. strict parse of the whole (fence-stripped) reply,
//! 2. otherwise parse the first top-level balanced `{...}` span, found with
//!    a string-aware bracket-depth counter,
//! 3. otherwise synthesize an indeterminate fallback report.
//!
//! A successfully parsed object is returned verbatim with no schema
//! validation; whatever keys the model produced pass through unchanged.

use crashsight_core::models::AccidentReport;
use serde_json::Value;

/// Extract a JSON report from the raw model reply. Always produces a value;
/// unparseable replies degrade to the fallback report instead of failing
/// the request.
pub fn extract_report(raw: &str) -> Value {
    let stripped = strip_code_fences(raw);

    if let Ok(value) = serde_json::from_str::<Value>(stripped) {
        if value.is_object() {
            return value;
        }
    }

    match balanced_object_span(raw) {
        Some(span) => match serde_json::from_str::<Value>(span) {
            Ok(value) if value.is_object() => value,
            Ok(_) => fallback(Some(raw), None),
            Err(e) => {
                tracing::debug!(error = %e, "Brace span in model reply failed to parse");
                fallback(None, Some(&e.to_string()))
            }
        },
        None => fallback(Some(raw), None),
    }
}

fn fallback(raw_response: Option<&str>, error: Option<&str>) -> Value {
    let report = AccidentReport::indeterminate(
        raw_response.map(str::to_string),
        error.map(str::to_string),
    );
    serde_json::to_value(&report).unwrap_or_else(|_| Value::Null)
}

/// Strip a surrounding markdown code fence, if present.
fn strip_code_fences(text: &str) -> &str {
    let fenced = if text.contains("```json") {
        text.split("```json").nth(1).and_then(|s| s.split("```").next())
    } else if text.contains("```") {
        text.split("```").nth(1).and_then(|s| s.split("```").next())
    } else {
        None
    };
    fenced.unwrap_or(text).trim()
}

/// Locate the first top-level balanced `{...}` span. Tracks JSON string
/// state so braces inside quoted values do not affect the depth count.
fn balanced_object_span(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=i]);
                }
            }
            _ => {}
        }
    }
    None
}
