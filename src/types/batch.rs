//! Batch (NDJSON) response lines.

use serde::{Deserialize, Serialize};

/// Outcome for one submitted entity. `line` is the 1-based position of the
/// entity in the request body; per-entity failures live here as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResultLine {
    pub line: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Set instead of `code` by product-like resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<LineError>,
}

/// Validation detail attached to a failed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineError {
    #[serde(default)]
    pub property: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}

impl BatchResultLine {
    /// 201 (created) and 204 (updated) are the usual successes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    pub fn entity_code(&self) -> Option<&str> {
        self.code.as_deref().or(self.identifier.as_deref())
    }
}
