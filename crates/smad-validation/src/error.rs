//! Error types for the validation engine
//!
//! Provides error handling for:
//! - Per-requirement failures (missing formula, extraction, evaluation),
//!   which are always folded into an ERROR [`ValidationResult`]
//! - Configuration loading
//! - Mission store access
//!
//! [`ValidationResult`]: smad_model::ValidationResult

use smad_expr::ExprError;
use smad_path::PathError;
use std::path::PathBuf;

/// Why a single requirement could not be evaluated
///
/// The display text is what ends up in `ValidationResult::error`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Requirement carries no formula
    #[error("No validation formula defined")]
    MissingFormula,

    /// A declared variable could not be extracted
    #[error("Failed to extract {variable}: {source}")]
    Extraction {
        variable: String,
        #[source]
        source: ExtractionError,
    },

    /// Formula rejected by the evaluator
    #[error("{0}")]
    Expression(#[from] ExprError),
}

impl ValidationError {
    /// Create extraction error for a variable
    pub fn extraction(variable: impl Into<String>, source: impl Into<ExtractionError>) -> Self {
        Self::Extraction {
            variable: variable.into(),
            source: source.into(),
        }
    }
}

/// Failure to obtain a numeric value for one variable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractionError {
    /// Path malformed or matched nothing
    #[error(transparent)]
    Path(#[from] PathError),

    /// Path matched a value that is not a number
    #[error("value at '{path}' is not numeric (found {found})")]
    NotNumeric { path: String, found: String },
}

/// Errors while loading [`ValidationConfig`](crate::ValidationConfig)
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for the schema
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Value out of range
    #[error("invalid configuration value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },
}

impl ConfigError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors from a [`MissionStore`](crate::MissionStore)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No mission with that id
    #[error("mission not found: {0}")]
    MissionNotFound(String),

    /// Mission has no design solution at that tab index
    #[error("mission '{mission_id}' has no design solution at tab {tab_index}")]
    TabNotFound { mission_id: String, tab_index: usize },

    /// Backend failure
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
