//! Comparison operators used in requirement thresholds

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Relational operator of a numeric threshold
///
/// Serialized as its symbol (`"<="`, `">="`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComparisonOperator {
    /// `<`
    #[serde(rename = "<")]
    LessThan,
    /// `<=`
    #[serde(rename = "<=")]
    LessThanOrEqual,
    /// `==`
    #[serde(rename = "==")]
    Equal,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterThanOrEqual,
    /// `>`
    #[serde(rename = ">")]
    GreaterThan,
    /// `!=`
    #[serde(rename = "!=")]
    NotEqual,
}

impl ComparisonOperator {
    /// Operator symbol
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessThanOrEqual => "<=",
            Self::Equal => "==",
            Self::GreaterThanOrEqual => ">=",
            Self::GreaterThan => ">",
            Self::NotEqual => "!=",
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComparisonOperator {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "<" => Ok(Self::LessThan),
            "<=" => Ok(Self::LessThanOrEqual),
            "==" | "===" => Ok(Self::Equal),
            ">=" => Ok(Self::GreaterThanOrEqual),
            ">" => Ok(Self::GreaterThan),
            "!=" | "!==" => Ok(Self::NotEqual),
            other => Err(ModelError::UnknownOperator(other.to_string())),
        }
    }
}
