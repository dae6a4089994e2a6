//! Validation reports and summaries

use serde::{Deserialize, Serialize};
use smad_model::{SolutionStatus, ValidationResult};

/// Prefix of the key a report is stored under
pub const REPORT_KEY_PREFIX: &str = "validation_";

/// Aggregate counts over a set of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationSummary {
    /// Number of results
    pub total: usize,
    /// PASS results
    pub passed: usize,
    /// FAIL results
    pub failed: usize,
    /// ERROR results
    pub errored: usize,
    /// Passed share in percent, 0 when there are no results
    pub pass_rate: f64,
    /// Every result passed and there was at least one
    pub all_passed: bool,
    /// Resulting solution status
    pub status: SolutionStatus,
}

impl ValidationSummary {
    /// Summarise a result set
    #[must_use]
    pub fn from_results(results: &[ValidationResult]) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.is_pass()).count();
        let failed = results.iter().filter(|r| r.is_fail()).count();
        let errored = results.iter().filter(|r| r.is_error()).count();

        #[allow(clippy::cast_precision_loss)]
        let pass_rate = if total == 0 {
            0.0
        } else {
            passed as f64 * 100.0 / total as f64
        };
        let all_passed = total > 0 && passed == total;
        let status = if total == 0 {
            SolutionStatus::UnderEvaluation
        } else if all_passed {
            SolutionStatus::RequirementsMet
        } else {
            SolutionStatus::RequirementsNotMet
        };

        Self {
            total,
            passed,
            failed,
            errored,
            pass_rate,
            all_passed,
            status,
        }
    }
}

/// Results of validating one design solution, with their summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// Solution the results belong to
    pub solution_id: String,
    /// Per-requirement results in requirement order
    pub results: Vec<ValidationResult>,
    /// Aggregate counts
    pub summary: ValidationSummary,
}

impl ValidationReport {
    /// Build report and its summary
    #[must_use]
    pub fn new(solution_id: impl Into<String>, results: Vec<ValidationResult>) -> Self {
        let summary = ValidationSummary::from_results(&results);
        Self {
            solution_id: solution_id.into(),
            results,
            summary,
        }
    }

    /// Key the report is persisted under: `validation_<solutionId>`
    #[must_use]
    pub fn storage_key(&self) -> String {
        storage_key(&self.solution_id)
    }

    /// Results that did not pass
    pub fn unmet(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.is_pass())
    }
}

/// Storage key for a solution id
#[must_use]
pub fn storage_key(solution_id: &str) -> String {
    format!("{REPORT_KEY_PREFIX}{solution_id}")
}
