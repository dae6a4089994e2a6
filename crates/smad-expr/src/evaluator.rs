//! Formula evaluation entry points

use crate::error::ExprError;
use crate::parser::parse_expression;
use crate::substitute::{check_charset, substitute, Values};

/// Default upper bound on formula length, in bytes
pub const DEFAULT_MAX_FORMULA_LEN: usize = 4096;

/// Formula evaluator with its resource limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    max_formula_len: usize,
}

impl Evaluator {
    /// Create evaluator with default limits
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With maximum formula length (bytes, checked before and after substitution)
    #[inline]
    #[must_use]
    pub fn with_max_formula_len(mut self, max: usize) -> Self {
        self.max_formula_len = max;
        self
    }

    /// Configured length limit
    #[inline]
    #[must_use]
    pub fn max_formula_len(&self) -> usize {
        self.max_formula_len
    }

    /// Substitute `values` into `formula` and evaluate the result
    ///
    /// Units are display-only; only the numeric magnitudes take part.
    ///
    /// # Errors
    /// Returns an [`ExprError`] when the formula is too long, fails the
    /// character gate after substitution, or does not parse.
    pub fn evaluate(&self, formula: &str, values: &Values) -> Result<bool, ExprError> {
        self.check_len(formula)?;
        let numeric = substitute(formula, values)?;
        tracing::debug!(formula, substituted = %numeric, "evaluating formula");
        self.evaluate_expression(&numeric)
    }

    /// Evaluate an already-substituted numeric expression
    ///
    /// # Errors
    /// Same as [`Evaluator::evaluate`].
    pub fn evaluate_expression(&self, expression: &str) -> Result<bool, ExprError> {
        self.check_len(expression)?;
        check_charset(expression)?;
        Ok(parse_expression(expression)?.eval().truthy())
    }

    fn check_len(&self, text: &str) -> Result<(), ExprError> {
        if text.len() > self.max_formula_len {
            return Err(ExprError::TooLong {
                length: text.len(),
                limit: self.max_formula_len,
            });
        }
        Ok(())
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self {
            max_formula_len: DEFAULT_MAX_FORMULA_LEN,
        }
    }
}

/// Evaluate `formula` over `values` with default limits
///
/// # Errors
/// See [`Evaluator::evaluate`].
pub fn evaluate(formula: &str, values: &Values) -> Result<bool, ExprError> {
    Evaluator::default().evaluate(formula, values)
}

/// Evaluate a numeric expression with default limits
///
/// # Errors
/// See [`Evaluator::evaluate_expression`].
pub fn evaluate_expression(expression: &str) -> Result<bool, ExprError> {
    Evaluator::default().evaluate_expression(expression)
}

#[cfg(test)]
mod tests {
    use super::*;
    use smad_model::Measurement;

    fn values(pairs: &[(&str, f64)]) -> Values {
        pairs
            .iter()
            .map(|(name, value)| (name.to_string(), Measurement::new(*value, "")))
            .collect()
    }

    #[test]
    fn evaluates_with_substitution() {
        let vals = values(&[("gsd", 8.0)]);
        assert!(evaluate("gsd <= 10", &vals).unwrap());
        let vals = values(&[("gsd", 15.0)]);
        assert!(!evaluate("gsd <= 10", &vals).unwrap());
    }

    #[test]
    fn units_do_not_leak_into_evaluation() {
        let mut vals = Values::new();
        vals.insert("mass".into(), Measurement::new(120.0, "kg; drop table"));
        assert!(evaluate("mass < 150", &vals).unwrap());
    }

    #[test]
    fn unresolved_variable_is_invalid() {
        let err = evaluate("gsd <= gsdMax", &values(&[("gsd", 5.0)])).unwrap_err();
        assert!(matches!(err, ExprError::InvalidCharacter { character: 'g', position: 5 }));
    }

    #[test]
    fn length_limit() {
        let evaluator = Evaluator::new().with_max_formula_len(8);
        let err = evaluator.evaluate("1 + 1 + 1 == 3", &Values::new()).unwrap_err();
        assert_eq!(err, ExprError::TooLong { length: 14, limit: 8 });
        assert!(evaluator.evaluate("1 < 2", &Values::new()).unwrap());
    }

    #[test]
    fn negative_value_substitution_is_well_formed() {
        let vals = values(&[("a", 1.0), ("b", -2.0)]);
        assert!(evaluate("a-b == 3", &vals).unwrap());
    }
}
