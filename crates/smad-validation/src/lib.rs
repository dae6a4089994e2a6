//! SMAD Requirement Validation Engine
//!
//! Checks candidate design solutions against mission requirements that carry
//! machine-checkable formulas.
//!
//! # Core Concepts
//!
//! - **RequirementValidator**: extracts each declared variable from the
//!   solution, evaluates the formula and folds every failure into an ERROR
//!   result
//! - **ValidationReport**: per-solution results plus a summary and the
//!   resulting solution status
//! - **MissionStore**: storage seam used by [`ValidationService`] to load
//!   requirements and solutions and persist reports
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use smad_model::{
//!     DesignSolution, Requirement, ValidationFormula, ValidationStatus, VariableSpec,
//! };
//! use smad_validation::validate_requirement;
//!
//! let requirement = Requirement::new("REQ-001", "Ground sample distance").with_formula(
//!     ValidationFormula::new("gsd <= 10").with_variable(
//!         "gsd",
//!         VariableSpec::with_unit("components.find(c => c.type === 'payload').gsd", "m"),
//!     ),
//! );
//! let solution = DesignSolution::new(json!({
//!     "components": [{"type": "payload", "gsd": 8}]
//! }));
//!
//! let result = validate_requirement(&requirement, &solution);
//! assert_eq!(result.status, ValidationStatus::Pass);
//! assert_eq!(result.formula, "8m <= 10");
//! ```

#![warn(unreachable_pub)]

mod config;
mod error;
mod report;
mod service;
mod store;
mod thresholds;
mod validator;

pub use config::{MissingFormulaPolicy, ValidationConfig};
pub use error::{ConfigError, ExtractionError, StoreError, StoreResult, ValidationError};
pub use report::{storage_key, ValidationReport, ValidationSummary, REPORT_KEY_PREFIX};
pub use service::ValidationService;
pub use store::{InMemoryMissionStore, MissionStore};
pub use thresholds::required_values;
pub use validator::{
    unused_variables, validate_all_requirements, validate_requirement, RequirementValidator,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
