//! Requirement validation against a design solution

use crate::config::{MissingFormulaPolicy, ValidationConfig};
use crate::error::{ExtractionError, ValidationError};
use crate::thresholds::required_values;
use serde_json::Value;
use smad_expr::{identifiers, render_display, Evaluator, Values};
use smad_model::{DesignSolution, Measurement, Requirement, ValidationFormula, ValidationResult};
use smad_path::PathExpr;

/// Validates requirements against design solutions
///
/// Holds no per-call state, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct RequirementValidator {
    config: ValidationConfig,
    evaluator: Evaluator,
}

impl RequirementValidator {
    /// Create validator with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create validator from configuration
    #[must_use]
    pub fn from_config(config: ValidationConfig) -> Self {
        Self {
            evaluator: config.evaluator(),
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate one requirement
    ///
    /// Never fails: missing formulas, extraction failures and malformed
    /// expressions all come back as ERROR results.
    #[must_use]
    pub fn validate_requirement(
        &self,
        requirement: &Requirement,
        solution: &DesignSolution,
    ) -> ValidationResult {
        let Some(formula) = &requirement.validation_formula else {
            return self.error_result(
                requirement,
                &ValidationError::MissingFormula,
                Values::new(),
                "",
            );
        };

        let unused = unused_variables(formula);
        if !unused.is_empty() {
            tracing::warn!(
                requirement = %requirement.id,
                unused = ?unused,
                "declared variables not referenced by formula"
            );
        }

        let mut actual = Values::new();
        for (variable, spec) in &formula.variables {
            match extract_number(solution.as_value(), spec.path()) {
                Ok(value) => {
                    tracing::debug!(
                        requirement = %requirement.id,
                        variable = %variable,
                        path = spec.path(),
                        value,
                        "extracted variable"
                    );
                    actual.insert(variable.clone(), Measurement::new(value, spec.unit()));
                }
                Err(source) => {
                    let err = ValidationError::extraction(variable.clone(), source);
                    return self.error_result(requirement, &err, actual, &formula.formula);
                }
            }
        }

        self.evaluate(requirement, formula, actual)
    }

    /// Validate every requirement in order
    ///
    /// Requirements without a formula are dropped under
    /// [`MissingFormulaPolicy::Skip`] and reported as ERROR under
    /// [`MissingFormulaPolicy::Report`].
    #[must_use]
    pub fn validate_all_requirements(
        &self,
        requirements: &[Requirement],
        solution: &DesignSolution,
    ) -> Vec<ValidationResult> {
        let results: Vec<ValidationResult> = requirements
            .iter()
            .filter(|r| {
                r.is_validatable() || self.config.missing_formula == MissingFormulaPolicy::Report
            })
            .map(|r| self.validate_requirement(r, solution))
            .collect();

        let passed = results.iter().filter(|r| r.is_pass()).count();
        let errored = results.iter().filter(|r| r.is_error()).count();
        tracing::info!(
            requirements = requirements.len(),
            validated = results.len(),
            passed,
            failed = results.len() - passed - errored,
            errored,
            "batch validation complete"
        );
        results
    }

    fn evaluate(
        &self,
        requirement: &Requirement,
        formula: &ValidationFormula,
        actual: Values,
    ) -> ValidationResult {
        match self.evaluator.evaluate(&formula.formula, &actual) {
            Ok(passed) => {
                let shown = render_display(&formula.formula, &actual);
                tracing::debug!(
                    requirement = %requirement.id,
                    passed,
                    formula = %shown,
                    "evaluated"
                );
                ValidationResult::evaluated(
                    requirement.id.clone(),
                    passed,
                    actual,
                    required_values(&formula.formula),
                    shown,
                )
            }
            Err(e) => self.error_result(
                requirement,
                &ValidationError::from(e),
                actual,
                &formula.formula,
            ),
        }
    }

    #[allow(clippy::unused_self)]
    fn error_result(
        &self,
        requirement: &Requirement,
        error: &ValidationError,
        actual: Values,
        formula: &str,
    ) -> ValidationResult {
        tracing::warn!(
            requirement = %requirement.id,
            error = %error,
            "requirement could not be validated"
        );
        ValidationResult::error(requirement.id.clone(), error.to_string(), actual, formula)
    }
}

/// Declared variables the formula text never mentions, in declaration order
#[must_use]
pub fn unused_variables(formula: &ValidationFormula) -> Vec<&str> {
    let referenced = identifiers(&formula.formula);
    formula
        .variables
        .keys()
        .filter(|name| !referenced.iter().any(|r| r == *name))
        .map(String::as_str)
        .collect()
}

/// Resolve `path` and coerce the value to a number
///
/// Numeric strings such as `"12.5"` are accepted.
fn extract_number(document: &Value, path: &str) -> Result<f64, ExtractionError> {
    let expr = PathExpr::parse(path)?;
    let value = expr.extract(document)?;
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    };
    number.ok_or_else(|| ExtractionError::NotNumeric {
        path: path.to_string(),
        found: type_name(value).to_string(),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validate one requirement with default configuration
#[must_use]
pub fn validate_requirement(
    requirement: &Requirement,
    solution: &DesignSolution,
) -> ValidationResult {
    RequirementValidator::new().validate_requirement(requirement, solution)
}

/// Validate a batch of requirements with default configuration
#[must_use]
pub fn validate_all_requirements(
    requirements: &[Requirement],
    solution: &DesignSolution,
) -> Vec<ValidationResult> {
    RequirementValidator::new().validate_all_requirements(requirements, solution)
}
