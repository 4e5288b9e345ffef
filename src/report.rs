//! JSON export of validation findings, for CI tooling.
//!
//! Gated behind the `json-report` feature. The shape is deliberately flat:
//! severity, service, and message as strings, plus the overall validity flag,
//! so a pipeline can fail a build with `jq '.valid'`.

use std::cmp::Reverse;

use serde::Serialize;

use crate::validator::DependencyValidator;

/// One finding, flattened to strings.
#[derive(Debug, Clone, Serialize)]
pub struct JsonFinding {
    /// "Error" or "Warning"
    pub severity: String,
    /// Display name of the concerned service identity
    pub service: String,
    /// Human-readable explanation
    pub message: String,
}

/// Serializable snapshot of a validation run.
#[derive(Debug, Clone, Serialize)]
pub struct JsonReport {
    /// False iff any Error-severity finding exists
    pub valid: bool,
    /// Findings sorted by descending severity, then service and message
    pub findings: Vec<JsonFinding>,
}

impl JsonReport {
    /// Snapshots the validator's current findings.
    pub fn from_validator(validator: &DependencyValidator<'_>) -> Self {
        let mut ordered: Vec<_> = validator.findings().iter().collect();
        ordered.sort_by_key(|f| (Reverse(f.severity), f.service.display_name(), f.message.clone()));

        Self {
            valid: validator.is_valid(),
            findings: ordered
                .into_iter()
                .map(|f| JsonFinding {
                    severity: f.severity.to_string(),
                    service: f.service.display_name(),
                    message: f.message.clone(),
                })
                .collect(),
        }
    }

    /// Pretty-printed JSON rendering.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
