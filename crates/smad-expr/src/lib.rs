//! SMAD Formula Evaluator
//!
//! Evaluates requirement formulas such as `gsd <= 10 && mass < massMax`
//! against extracted values without any host `eval` primitive.
//!
//! # Pipeline
//!
//! ```text
//! formula ──substitute──▶ numeric text ──gate──▶ tokens ──parse──▶ Expr ──eval──▶ bool
//! ```
//!
//! - **substitute**: whole-word replacement of variable names by their values
//! - **gate**: only digits, whitespace and `+ - * / . ( ) < = > & | !` may
//!   remain; anything else (e.g. an unknown identifier) is rejected
//! - **parse/eval**: recursive descent over the numeric text, strict
//!   equality and numeric truthiness
//!
//! # Example
//!
//! ```rust
//! use indexmap::IndexMap;
//! use smad_expr::{evaluate, substitute};
//! use smad_model::Measurement;
//!
//! let mut values = IndexMap::new();
//! values.insert("gsd".to_string(), Measurement::new(5.0, "m"));
//! values.insert("gsdMax".to_string(), Measurement::new(10.0, "m"));
//!
//! assert_eq!(substitute("gsd <= gsdMax", &values).unwrap(), "5 <= 10");
//! assert!(evaluate("gsd <= gsdMax", &values).unwrap());
//! ```

#![warn(unreachable_pub)]

mod error;
mod eval;
mod evaluator;
mod lexer;
mod parser;
mod substitute;

pub use error::ExprError;
pub use eval::Value;
pub use evaluator::{evaluate, evaluate_expression, Evaluator, DEFAULT_MAX_FORMULA_LEN};
pub use parser::{parse_expression, BinaryOp, Expr, UnaryOp, MAX_NESTING_DEPTH, MAX_OPERATORS};
pub use substitute::{identifiers, render_display, substitute, Values};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
