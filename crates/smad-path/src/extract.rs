//! Walking a parsed path over a document

use crate::error::PathError;
use crate::expr::{Filter, PathExpr, Step};
use serde_json::Value;

impl PathExpr {
    /// Resolve against a document
    ///
    /// Filters return their first matching element.
    ///
    /// # Errors
    /// Returns [`PathError::NotFound`] naming the first step that resolved to
    /// nothing.
    pub fn extract<'v>(&self, document: &'v Value) -> Result<&'v Value, PathError> {
        let mut current = document;
        for step in self.steps() {
            current = resolve_step(step, current)
                .ok_or_else(|| PathError::not_found(self.source(), step.to_string()))?;
        }
        Ok(current)
    }
}

/// Parse `path` and resolve it against `document`
///
/// # Errors
/// Returns [`PathError::Syntax`] for malformed paths and
/// [`PathError::NotFound`] when nothing matches.
pub fn extract_value<'v>(document: &'v Value, path: &str) -> Result<&'v Value, PathError> {
    PathExpr::parse(path)?.extract(document)
}

fn resolve_step<'v>(step: &Step, node: &'v Value) -> Option<&'v Value> {
    match (step, node) {
        (Step::Field(name), Value::Object(map)) => map.get(name),
        (Step::Field(name), Value::Array(items)) => {
            name.parse::<usize>().ok().and_then(|i| items.get(i))
        }
        (Step::Index(index), Value::Array(items)) => items.get(*index),
        (Step::Index(index), Value::Object(map)) => map.get(&index.to_string()),
        (Step::Filter(filter), Value::Array(items)) => {
            items.iter().find(|item| filter.matches(item))
        }
        _ => None,
    }
}

impl Filter {
    /// Whether an array element satisfies the predicate
    #[must_use]
    pub fn matches(&self, element: &Value) -> bool {
        let mut current = element;
        for segment in &self.field {
            match current.get(segment) {
                Some(next) => current = next,
                None => return false,
            }
        }
        literal_matches(current, &self.literal)
    }
}

/// String-equality test between a field value and a filter literal
///
/// Strings compare by content; numbers and booleans by their JSON text, with
/// numerically equal spellings (`3` vs `3.0`) also accepted. Null, objects and
/// arrays never match.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn literal_matches(value: &Value, literal: &str) -> bool {
    match value {
        Value::String(s) => s == literal,
        Value::Number(n) => {
            n.to_string() == literal
                || matches!(
                    (n.as_f64(), literal.parse::<f64>()),
                    (Some(a), Ok(b)) if a == b
                )
        }
        Value::Bool(b) => literal == if *b { "true" } else { "false" },
        _ => false,
    }
}
