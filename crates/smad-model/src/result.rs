//! Validation results

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Outcome class of a single validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidationStatus {
    /// Formula evaluated to true
    Pass,
    /// Formula evaluated to false
    Fail,
    /// Requirement could not be evaluated
    Error,
}

impl Display for ValidationStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        })
    }
}

/// Extracted value with its display unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Numeric magnitude
    pub value: f64,
    /// Display unit, empty when none was declared
    #[serde(default)]
    pub unit: String,
}

impl Measurement {
    /// Create measurement
    #[inline]
    #[must_use]
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }
}

/// Result of validating one requirement against one design solution
///
/// Built once by the validator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Requirement this result belongs to
    pub requirement_id: String,
    /// PASS / FAIL / ERROR
    pub status: ValidationStatus,
    /// Values extracted from the solution, keyed by variable name
    #[serde(default)]
    pub actual_values: IndexMap<String, Measurement>,
    /// Thresholds recovered from the formula text, e.g. `gsd → "<=10"`
    #[serde(default)]
    pub required_values: IndexMap<String, String>,
    /// Display formula (values substituted) or the original formula on error
    #[serde(default)]
    pub formula: String,
    /// Error message for ERROR results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    /// Result of a formula that evaluated successfully
    #[must_use]
    pub fn evaluated(
        requirement_id: impl Into<String>,
        passed: bool,
        actual_values: IndexMap<String, Measurement>,
        required_values: IndexMap<String, String>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            requirement_id: requirement_id.into(),
            status: if passed {
                ValidationStatus::Pass
            } else {
                ValidationStatus::Fail
            },
            actual_values,
            required_values,
            formula: formula.into(),
            error: None,
        }
    }

    /// Result of a requirement that could not be evaluated
    ///
    /// `actual_values` keeps whatever was extracted before the failure.
    #[must_use]
    pub fn error(
        requirement_id: impl Into<String>,
        message: impl Into<String>,
        actual_values: IndexMap<String, Measurement>,
        formula: impl Into<String>,
    ) -> Self {
        Self {
            requirement_id: requirement_id.into(),
            status: ValidationStatus::Error,
            actual_values,
            required_values: IndexMap::new(),
            formula: formula.into(),
            error: Some(message.into()),
        }
    }

    /// Formula evaluated to true
    #[inline]
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.status == ValidationStatus::Pass
    }

    /// Formula evaluated to false
    #[inline]
    #[must_use]
    pub fn is_fail(&self) -> bool {
        self.status == ValidationStatus::Fail
    }

    /// Requirement could not be evaluated
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status == ValidationStatus::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn pass_result_wire_shape() {
        let mut actual = IndexMap::new();
        actual.insert("gsd".to_string(), Measurement::new(8.0, "m"));
        let mut required = IndexMap::new();
        required.insert("gsd".to_string(), "<=10".to_string());

        let result = ValidationResult::evaluated("REQ-001", true, actual, required, "8m <= 10");

        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "requirementId": "REQ-001",
                "status": "PASS",
                "actualValues": { "gsd": { "value": 8.0, "unit": "m" } },
                "requiredValues": { "gsd": "<=10" },
                "formula": "8m <= 10"
            })
        );
    }

    #[test]
    fn error_result_carries_message() {
        let message = "No validation formula defined";
        let result = ValidationResult::error("REQ-002", message, IndexMap::new(), "");
        assert!(result.is_error());
        assert_eq!(result.error.as_deref(), Some("No validation formula defined"));
        assert!(result.required_values.is_empty());

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["status"], json!("ERROR"));
    }

    #[test]
    fn fail_status() {
        let result =
            ValidationResult::evaluated("R", false, IndexMap::new(), IndexMap::new(), "15m <= 10");
        assert!(result.is_fail());
        assert_eq!(result.status.to_string(), "FAIL");
    }
}
