//! Formula evaluation errors
//!
//! Every variant renders with an `Invalid expression:` prefix so the message
//! can be shown to users as-is.

/// Errors raised while substituting, gating, parsing or evaluating a formula
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExprError {
    /// Character outside the permitted set after substitution
    #[error("Invalid expression: disallowed character '{character}' at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Operator character sequence with no supported meaning (`&`, `|`, `=`)
    #[error("Invalid expression: unsupported operator '{operator}' at position {position}")]
    UnsupportedOperator { operator: String, position: usize },

    /// Malformed numeric literal such as `1.2.3`
    #[error("Invalid expression: malformed number '{text}' at position {position}")]
    InvalidNumber { text: String, position: usize },

    /// Token that does not fit the grammar at this point
    #[error("Invalid expression: unexpected '{token}' at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// Input ended while an operand or `)` was still expected
    #[error("Invalid expression: unexpected end of input")]
    UnexpectedEnd,

    /// Expression contains no tokens
    #[error("Invalid expression: empty expression")]
    Empty,

    /// Formula exceeds the configured length limit
    #[error("Invalid expression: formula length {length} exceeds limit {limit}")]
    TooLong { length: usize, limit: usize },

    /// Parenthesis/unary nesting exceeds the parser limit
    #[error("Invalid expression: nesting deeper than {limit}")]
    TooDeep { limit: usize },

    /// More infix operators than the parser accepts
    #[error("Invalid expression: more than {limit} operators")]
    TooManyOperators { limit: usize },
}

impl ExprError {
    /// Create unexpected-token error
    pub fn unexpected(token: impl Into<String>, position: usize) -> Self {
        Self::UnexpectedToken {
            token: token.into(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_share_prefix() {
        let errors = [
            ExprError::InvalidCharacter { character: 'x', position: 0 },
            ExprError::UnsupportedOperator { operator: "&".into(), position: 2 },
            ExprError::InvalidNumber { text: "1.2.3".into(), position: 0 },
            ExprError::unexpected(")", 4),
            ExprError::UnexpectedEnd,
            ExprError::Empty,
            ExprError::TooLong { length: 10, limit: 5 },
            ExprError::TooDeep { limit: 64 },
            ExprError::TooManyOperators { limit: 1024 },
        ];
        for err in errors {
            assert!(err.to_string().starts_with("Invalid expression: "), "{err}");
        }
    }

    #[test]
    fn invalid_character_display() {
        let err = ExprError::InvalidCharacter { character: 'm', position: 1 };
        assert_eq!(
            err.to_string(),
            "Invalid expression: disallowed character 'm' at position 1"
        );
    }
}
