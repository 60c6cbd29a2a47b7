//! Response Parser: turns a free-text completion reply into a `ReconstructionResult`.
//!
//! The model is asked for JSON but nothing guarantees it. Fallback chain:
//! 1. the whole reply as a JSON object
//! 2. the span from the first `{` to the last `}` as a JSON object
//! 3. the trimmed reply as the reconstruction, with no explanations or keywords
//!
//! Never fails.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::models::reconstruction::ReconstructionResult;

pub fn parse_response(raw: &str) -> ReconstructionResult {
    if let Some(result) = parse_object(raw) {
        return result;
    }

    if let Some(result) = outermost_braces(raw).and_then(parse_object) {
        debug!("Completion reply wrapped in extra text, extracted embedded JSON object");
        return result;
    }

    warn!("Completion reply is not JSON, using it verbatim as the reconstruction");
    ReconstructionResult {
        reconstruction: raw.trim().to_string(),
        explanations: Vec::new(),
        keywords: Vec::new(),
    }
}

/// Parses `text` as JSON and maps it if the top-level value is an object.
fn parse_object(text: &str) -> Option<ReconstructionResult> {
    match serde_json::from_str::<Value>(text).ok()? {
        Value::Object(map) => Some(from_object(&map)),
        _ => None,
    }
}

/// Explicit schema mapping with empty defaults for absent or mistyped fields.
fn from_object(map: &Map<String, Value>) -> ReconstructionResult {
    ReconstructionResult {
        reconstruction: map
            .get("reconstruction")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        explanations: string_list(map.get("explanations")),
        keywords: string_list(map.get("keywords")),
    }
}

/// A list counts only if every element is a string.
fn string_list(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(String::from))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_default()
}

/// Greedy span from the first `{` to the last `}`. It may cover several
/// objects or stray braces in surrounding prose; parsing then fails and the
/// caller falls through to the verbatim result.
fn outermost_braces(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}
