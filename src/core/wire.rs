use serde::Deserialize;
use serde_json::Value;

use crate::core::error::ValidationIssue;

/// Header carrying the coarse error code of a rejected request.
pub(crate) const ERROR_CODE_HEADER: &str = "x-ic-error-code";

/// Header carrying a JSON array of field-level validation errors.
pub(crate) const ERROR_VALIDATION_HEADER: &str = "x-ic-error-validation";

#[derive(Deserialize)]
pub(crate) struct ValidationNode {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) path: Value,
}

impl From<ValidationNode> for ValidationIssue {
    fn from(n: ValidationNode) -> Self {
        ValidationIssue {
            message: n.message,
            path: path_segments(n.path),
        }
    }
}

/// `["chd", 0]` and `"chs"` are both accepted; anything else yields no path.
fn path_segments(path: Value) -> Vec<String> {
    match path {
        Value::Array(segments) => segments
            .into_iter()
            .map(|seg| match seg {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    }
}

/// Decode the `x-ic-error-validation` payload into the first message plus every
/// well-formed issue.
///
/// Only the first element decides: `None` unless the payload is a non-empty array whose
/// first element has a string `message`. Malformed later elements are skipped.
pub(crate) fn decode_validation(raw: &str) -> Option<(String, Vec<ValidationIssue>)> {
    let value: Value = serde_json::from_str(raw).ok()?;
    let nodes = value.as_array().filter(|nodes| !nodes.is_empty())?;
    let message = nodes[0].get("message")?.as_str()?.to_string();

    let issues = nodes
        .iter()
        .filter_map(|node| serde_json::from_value::<ValidationNode>(node.clone()).ok())
        .map(ValidationIssue::from)
        .collect();

    Some((message, issues))
}
