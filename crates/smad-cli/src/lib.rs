//! SMAD validation command line
//!
//! Backs the `smad-validate` binary:
//!
//! - `validate`: every requirement against one design solution
//! - `check`: a single requirement
//! - `eval`: a formula with explicit bindings
//! - `extract`: the value at a path
//!
//! Exit codes: 0 when everything passed, 1 on any FAIL/ERROR (or a false
//! formula), 2 when the inputs could not be used.

#![warn(unreachable_pub)]

pub mod cli;
pub mod commands;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::build_cli;
pub use commands::{run, Outcome, INPUT_ERROR_EXIT};
pub use logging::LogFormat;
