//! SMAD Mission Model
//!
//! Typed view of the mission data the requirement validation engine consumes
//! and produces.
//!
//! # Core Concepts
//!
//! - [`Requirement`]: mission specification item, optionally carrying a
//!   machine-checkable [`ValidationFormula`]
//! - [`DesignSolution`]: candidate spacecraft/orbit/ground-station document,
//!   treated as an opaque JSON tree
//! - [`ValidationResult`]: outcome of checking one requirement against one
//!   solution
//! - [`ComparisonOperator`]: relational operators recognised in thresholds
//!
//! # Example
//!
//! ```rust
//! use smad_model::{Requirement, ValidationFormula, VariableSpec};
//!
//! let requirement = Requirement::new("REQ-001", "Ground sample distance").with_formula(
//!     ValidationFormula::new("gsd <= 10").with_variable(
//!         "gsd",
//!         VariableSpec::with_unit(
//!             "spacecraft.components.find(c => c.type === 'payload').groundSampleDistance",
//!             "m",
//!         ),
//!     ),
//! );
//! assert!(requirement.is_validatable());
//! ```

#![warn(unreachable_pub)]

mod error;
mod operator;
mod requirement;
mod result;
mod solution;

pub use error::ModelError;
pub use operator::ComparisonOperator;
pub use requirement::{Priority, Requirement, RequirementType, ValidationFormula, VariableSpec};
pub use result::{Measurement, ValidationResult, ValidationStatus};
pub use solution::{DesignSolution, SolutionStatus};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
