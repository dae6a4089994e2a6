//! Typed path AST

use crate::error::PathError;
use crate::parser::Parser;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// One resolution step
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Object member (or array position when the name is numeric)
    Field(String),
    /// Array position
    Index(usize),
    /// First array element whose field equals a literal
    Filter(Filter),
}

/// Equality predicate of a filter step
///
/// `field` is relative to the array element: `c.spec.kind` becomes
/// `["spec", "kind"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Filter {
    /// Field path inside the element
    pub field: Vec<String>,
    /// Literal compared by string equality
    pub literal: String,
}

impl Filter {
    /// Create filter on a single field
    #[must_use]
    pub fn new(field: impl Into<String>, literal: impl Into<String>) -> Self {
        Self {
            field: vec![field.into()],
            literal: literal.into(),
        }
    }
}

/// Parsed path expression
///
/// Keeps the source text for diagnostics; equality compares steps only.
#[derive(Debug, Clone)]
pub struct PathExpr {
    steps: Vec<Step>,
    source: String,
}

impl PathExpr {
    /// Create path from steps
    #[must_use]
    pub fn new(steps: Vec<Step>) -> Self {
        let mut path = Self {
            steps,
            source: String::new(),
        };
        path.source = path.to_string();
        path
    }

    /// Parse path text
    ///
    /// # Errors
    /// Returns [`PathError::Syntax`] when the text does not follow the grammar.
    pub fn parse(source: &str) -> Result<Self, PathError> {
        let steps = Parser::new(source).parse()?;
        Ok(Self {
            steps,
            source: source.trim().to_string(),
        })
    }

    /// Resolution steps
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Root path (`$`)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Source text as written
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl PartialEq for PathExpr {
    fn eq(&self, other: &Self) -> bool {
        self.steps == other.steps
    }
}

impl Eq for PathExpr {}

impl FromStr for PathExpr {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Canonical rendering: dotted fields, bracketed indices, JSONPath filters
impl Display for PathExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return f.write_str("$");
        }
        for (i, step) in self.steps.iter().enumerate() {
            match step {
                Step::Field(name) if i == 0 && is_plain_name(name) => f.write_str(name)?,
                other => write!(f, "{other}")?,
            }
        }
        Ok(())
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) if is_plain_name(name) => write!(f, ".{name}"),
            Self::Field(name) => write!(f, "['{}']", escape(name)),
            Self::Index(index) => write!(f, "[{index}]"),
            Self::Filter(filter) => write!(f, "{filter}"),
        }
    }
}

impl Display for Filter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[?(@.{}=='{}')]",
            self.field.join("."),
            escape(&self.literal)
        )
    }
}

pub(crate) fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char) && name != "$"
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}
