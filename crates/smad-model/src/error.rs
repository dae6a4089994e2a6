//! Error types for the mission model

/// Errors raised while interpreting model values
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// Operator text is not one of the recognised comparison operators
    #[error("unknown comparison operator: '{0}'")]
    UnknownOperator(String),
}
