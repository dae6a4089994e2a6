//! Design solutions

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Candidate spacecraft/orbit/ground-station configuration
///
/// The validator makes no schema assumption beyond "JSON-like tree of
/// objects, arrays and scalars", so the document is kept as a raw
/// [`Value`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignSolution(Value);

impl DesignSolution {
    /// Wrap a document
    #[inline]
    #[must_use]
    pub fn new(document: Value) -> Self {
        Self(document)
    }

    /// Root of the document tree
    #[inline]
    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Solution identifier taken from the top-level `id` field
    ///
    /// Numeric ids are rendered as text.
    #[must_use]
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<Value> for DesignSolution {
    fn from(document: Value) -> Self {
        Self(document)
    }
}

/// Lifecycle status of a design solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolutionStatus {
    /// Newly proposed
    #[default]
    Proposed,
    /// Being evaluated or nothing evaluated yet
    UnderEvaluation,
    /// All requirements verified
    RequirementsMet,
    /// At least one requirement not verified
    RequirementsNotMet,
    /// Chosen baseline
    Selected,
    /// Discarded
    Rejected,
}

impl SolutionStatus {
    /// Wire name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::UnderEvaluation => "under_evaluation",
            Self::RequirementsMet => "requirements_met",
            Self::RequirementsNotMet => "requirements_not_met",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
