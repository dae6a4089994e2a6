//! Subcommand handlers

use crate::input::{load_requirements, load_solution, parse_bindings};
use crate::output::{write_report, write_result};
use anyhow::{anyhow, bail, Context, Result};
use clap::ArgMatches;
use smad_expr::{render_display, Evaluator};
use smad_path::PathExpr;
use smad_validation::{
    MissingFormulaPolicy, RequirementValidator, ValidationConfig, ValidationReport,
};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Outcome of a successfully executed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing failed
    Passed,
    /// At least one FAIL or ERROR, or a false formula
    Failed,
}

impl Outcome {
    /// Process exit code (input errors exit with 2 instead)
    #[must_use]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }

    fn from_pass(passed: bool) -> Self {
        if passed {
            Self::Passed
        } else {
            Self::Failed
        }
    }
}

/// Exit code for commands that could not run (unreadable or malformed input)
pub const INPUT_ERROR_EXIT: u8 = 2;

/// Dispatch the parsed command line, writing command output to `out`
///
/// # Errors
/// Any input problem: unreadable files, malformed JSON or TOML, unknown
/// requirement ids, bad bindings, malformed paths or formulas.
pub fn run(matches: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    match matches.subcommand() {
        Some(("validate", args)) => run_validate(args, out),
        Some(("check", args)) => run_check(args, out),
        Some(("eval", args)) => run_eval(args, out),
        Some(("extract", args)) => run_extract(args, out),
        Some((other, _)) => bail!("unknown command '{other}'"),
        None => bail!("no command given"),
    }
}

fn run_validate(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let solution_path = path_arg(args, "solution")?;
    let requirements = load_requirements(path_arg(args, "requirements")?)?;
    let solution = load_solution(solution_path)?;

    let mut config = match args.get_one::<PathBuf>("config") {
        Some(path) => ValidationConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ValidationConfig::default(),
    };
    if args.get_flag("report-missing") {
        config = config.with_missing_formula(MissingFormulaPolicy::Report);
    }

    let solution_id = solution.id().unwrap_or_else(|| file_stem(solution_path));
    let results = RequirementValidator::from_config(config)
        .validate_all_requirements(&requirements, &solution);
    let report = ValidationReport::new(solution_id, results);

    if is_json(args) {
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write_report(out, &report)?;
    }

    Ok(Outcome::from_pass(report.summary.failed + report.summary.errored == 0))
}

fn run_check(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let requirements = load_requirements(path_arg(args, "requirements")?)?;
    let solution = load_solution(path_arg(args, "solution")?)?;
    let id = args
        .get_one::<String>("requirement-id")
        .ok_or_else(|| anyhow!("missing --requirement-id"))?;

    let requirement = requirements
        .iter()
        .find(|r| &r.id == id)
        .ok_or_else(|| anyhow!("requirement '{id}' not found"))?;
    let result = RequirementValidator::new().validate_requirement(requirement, &solution);

    if is_json(args) {
        serde_json::to_writer_pretty(&mut *out, &result)?;
        writeln!(out)?;
    } else {
        write_result(out, &result)?;
    }
    Ok(Outcome::from_pass(result.is_pass()))
}

fn run_eval(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let formula = args
        .get_one::<String>("formula")
        .ok_or_else(|| anyhow!("missing formula"))?;
    let values = parse_bindings(args.get_many::<String>("var").into_iter().flatten())?;

    let passed = Evaluator::new().evaluate(formula, &values)?;
    writeln!(out, "{} => {passed}", render_display(formula, &values))?;
    Ok(Outcome::from_pass(passed))
}

fn run_extract(args: &ArgMatches, out: &mut impl Write) -> Result<Outcome> {
    let solution = load_solution(path_arg(args, "solution")?)?;
    let raw = args
        .get_one::<String>("path")
        .ok_or_else(|| anyhow!("missing path"))?;

    let path = PathExpr::parse(raw)?;
    tracing::debug!(path = %path, "normalised path");
    let value = path.extract(solution.as_value())?;
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(Outcome::Passed)
}

fn path_arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    args.get_one::<PathBuf>(name)
        .map(PathBuf::as_path)
        .ok_or_else(|| anyhow!("missing --{name}"))
}

fn is_json(args: &ArgMatches) -> bool {
    args.get_one::<String>("format").is_some_and(|f| f == "json")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "solution".to_string(), |s| s.to_string_lossy().into_owned())
}
