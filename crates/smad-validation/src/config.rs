//! Validation engine configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! missing_formula = "report"
//! max_formula_len = 2048
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use smad_expr::{Evaluator, DEFAULT_MAX_FORMULA_LEN};
use std::path::Path;

/// How batch validation treats requirements without a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFormulaPolicy {
    /// Leave them out of the batch result
    #[default]
    Skip,
    /// Include an ERROR result for each
    Report,
}

/// Validation engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Batch treatment of requirements without a formula
    pub missing_formula: MissingFormulaPolicy,
    /// Upper bound on formula length in bytes
    pub max_formula_len: usize,
}

impl ValidationConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With missing-formula policy
    #[inline]
    #[must_use]
    pub fn with_missing_formula(mut self, policy: MissingFormulaPolicy) -> Self {
        self.missing_formula = policy;
        self
    }

    /// With maximum formula length
    #[inline]
    #[must_use]
    pub fn with_max_formula_len(mut self, max: usize) -> Self {
        self.max_formula_len = max;
        self
    }

    /// Parse from TOML text
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::InvalidValue`] for a zero length limit.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] when the file cannot be read, otherwise as
    /// [`ValidationConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        Self::from_toml_str(&text)
    }

    /// Evaluator honouring these limits
    #[inline]
    #[must_use]
    pub fn evaluator(&self) -> Evaluator {
        Evaluator::new().with_max_formula_len(self.max_formula_len)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_formula_len == 0 {
            return Err(ConfigError::InvalidValue {
                key: "max_formula_len".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            missing_formula: MissingFormulaPolicy::Skip,
            max_formula_len: DEFAULT_MAX_FORMULA_LEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults() {
        let config = ValidationConfig::new();
        assert_eq!(config.missing_formula, MissingFormulaPolicy::Skip);
        assert_eq!(config.max_formula_len, DEFAULT_MAX_FORMULA_LEN);
        assert_eq!(config.evaluator().max_formula_len(), DEFAULT_MAX_FORMULA_LEN);
    }

    #[test]
    fn builder() {
        let config = ValidationConfig::new()
            .with_missing_formula(MissingFormulaPolicy::Report)
            .with_max_formula_len(128);
        assert_eq!(config.missing_formula, MissingFormulaPolicy::Report);
        assert_eq!(config.evaluator().max_formula_len(), 128);
    }

    #[test]
    fn parse_partial_toml() {
        let config = ValidationConfig::from_toml_str("missing_formula = \"report\"").unwrap();
        assert_eq!(config.missing_formula, MissingFormulaPolicy::Report);
        assert_eq!(config.max_formula_len, DEFAULT_MAX_FORMULA_LEN);

        let config = ValidationConfig::from_toml_str("").unwrap();
        assert_eq!(config, ValidationConfig::default());
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = ValidationConfig::from_toml_str("max_len = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_length_limit_rejected() {
        let err = ValidationConfig::from_toml_str("max_formula_len = 0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_formula_len = 512").unwrap();
        let config = ValidationConfig::load(file.path()).unwrap();
        assert_eq!(config.max_formula_len, 512);

        let err = ValidationConfig::load("/nonexistent/smad.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
