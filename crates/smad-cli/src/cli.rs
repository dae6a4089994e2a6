//! Command-line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `smad-validate` command
#[must_use]
pub fn build_cli() -> Command {
    Command::new("smad-validate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate mission design solutions against requirement formulas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("log-format")
                .long("log-format")
                .global(true)
                .default_value("pretty")
                .value_parser(["pretty", "json"])
                .help("Log output format (filter with RUST_LOG)"),
        )
        .subcommand(
            Command::new("validate")
                .about("Validate every requirement against a design solution")
                .arg(requirements_arg())
                .arg(solution_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .value_parser(value_parser!(PathBuf))
                        .help("TOML validation config"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("text")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                )
                .arg(
                    Arg::new("report-missing")
                        .long("report-missing")
                        .action(ArgAction::SetTrue)
                        .help("Report requirements without a formula as ERROR"),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Validate a single requirement")
                .arg(requirements_arg())
                .arg(solution_arg())
                .arg(
                    Arg::new("requirement-id")
                        .long("requirement-id")
                        .required(true)
                        .help("Requirement to validate"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("text")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            Command::new("eval")
                .about("Evaluate a formula with explicit variable values")
                .arg(Arg::new("formula").required(true).help("Formula, e.g. 'gsd <= 10'"))
                .arg(
                    Arg::new("var")
                        .long("var")
                        .action(ArgAction::Append)
                        .help("Variable binding name=value[unit], e.g. gsd=8m"),
                ),
        )
        .subcommand(
            Command::new("extract")
                .about("Print the value at a path in a design solution")
                .arg(solution_arg())
                .arg(
                    Arg::new("path")
                        .required(true)
                        .help("Path, e.g. \"components.find(c => c.type === 'payload').mass\""),
                ),
        )
}

fn requirements_arg() -> Arg {
    Arg::new("requirements")
        .long("requirements")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with a requirement array (or {\"requirements\": [...]})")
}

fn solution_arg() -> Arg {
    Arg::new("solution")
        .long("solution")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("JSON design solution document")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn parses_validate() {
        let matches = build_cli()
            .try_get_matches_from([
                "smad-validate",
                "--log-format",
                "json",
                "validate",
                "--requirements",
                "r.json",
                "--solution",
                "s.json",
                "--report-missing",
            ])
            .unwrap();
        assert_eq!(matches.get_one::<String>("log-format").map(String::as_str), Some("json"));
        let (name, args) = matches.subcommand().unwrap();
        assert_eq!(name, "validate");
        assert!(args.get_flag("report-missing"));
        assert_eq!(args.get_one::<String>("format").map(String::as_str), Some("text"));
    }

    #[test]
    fn rejects_unknown_format() {
        let result = build_cli().try_get_matches_from([
            "smad-validate",
            "validate",
            "--requirements",
            "r.json",
            "--solution",
            "s.json",
            "--format",
            "xml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn eval_collects_vars() {
        let matches = build_cli()
            .try_get_matches_from([
                "smad-validate",
                "eval",
                "a < b",
                "--var",
                "a=1",
                "--var",
                "b=2",
            ])
            .unwrap();
        let (_, args) = matches.subcommand().unwrap();
        let vars: Vec<_> = args.get_many::<String>("var").unwrap().collect();
        assert_eq!(vars, ["a=1", "b=2"]);
    }
}
