//! Current-project descriptor parsing
//!
//! The host passes the current project either as a JSON object
//! (`{"name": ..., "path": ...}`) or as a plain string. Parsing never fails:
//! anything that is not a JSON object is kept verbatim.

use serde_json::Value;
use tracing::debug;

/// Placeholder shown for a field missing from a parsed project object.
pub const UNKNOWN: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectRef {
    /// JSON object with `name` and `path`, missing fields replaced by [`UNKNOWN`]
    Parsed { name: String, path: String },
    /// Anything else, unchanged
    Raw(String),
}

impl ProjectRef {
    pub fn parse(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(obj)) => Self::Parsed {
                name: field_text(obj.get("name")),
                path: field_text(obj.get("path")),
            },
            Ok(other) => {
                debug!("project descriptor is JSON but not an object: {}", other);
                Self::Raw(raw.to_string())
            }
            Err(e) => {
                debug!("project descriptor is not JSON: {}", e);
                Self::Raw(raw.to_string())
            }
        }
    }

    /// Text shown on the `Project:` line.
    pub fn display_name(&self) -> &str {
        match self {
            Self::Parsed { name, .. } => name,
            Self::Raw(raw) => raw,
        }
    }
}

// Strings are shown bare, other JSON values as compact JSON text.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
