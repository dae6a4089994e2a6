//! SMAD Path Expressions
//!
//! Locates a single value inside a design-solution document.
//!
//! # Grammar
//!
//! - field access: `spacecraft.orbit.altitude` (optional `$` root)
//! - array index: `groundStations[0]`, quoted key: `props['dry-mass']`
//! - first-match filter, two spellings of the same step:
//!   - `components.find(c => c.type === 'payload')`
//!   - `components[?(@.type=='payload')]`
//!
//! Paths are parsed into a [`PathExpr`] of typed [`Step`]s and then walked
//! against the document; nothing is translated through regular expressions.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use smad_path::extract_value;
//!
//! let solution = json!({
//!     "components": [
//!         { "type": "power", "mass": 50 },
//!         { "type": "payload", "mass": 20 }
//!     ]
//! });
//! let mass = extract_value(&solution, "components.find(c => c.type === 'payload').mass").unwrap();
//! assert_eq!(mass, &json!(20));
//! ```

#![warn(unreachable_pub)]

mod error;
mod expr;
mod extract;
mod parser;

pub use error::PathError;
pub use expr::{Filter, PathExpr, Step};
pub use extract::{extract_value, literal_matches};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
