//! Errors for path parsing and resolution

/// Errors related to path expressions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Path text does not follow the grammar
    #[error("invalid path syntax at position {position}: {message}")]
    Syntax { position: usize, message: String },

    /// Path resolved to nothing in the document
    #[error("no value found at path '{path}' (step '{step}' did not resolve)")]
    NotFound { path: String, step: String },
}

impl PathError {
    /// Create syntax error at byte position
    pub fn syntax(position: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            position,
            message: message.into(),
        }
    }

    /// Create not-found error for a path and its failing step
    pub fn not_found(path: impl Into<String>, step: impl Into<String>) -> Self {
        Self::NotFound {
            path: path.into(),
            step: step.into(),
        }
    }

    /// Whether the path was well-formed but matched nothing
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
