use pretty_assertions::assert_eq;
use smad_test_utils::{mixed_requirements, requirement_with_formula, sample_solution_document};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(gsd: f64) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("requirements.json"),
            serde_json::to_string(&mixed_requirements()).unwrap(),
        )
        .unwrap();
        std::fs::write(
            dir.path().join("solution.json"),
            serde_json::to_string(&sample_solution_document(gsd)).unwrap(),
        )
        .unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }
}

fn smad(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_smad-validate"))
        .args(args)
        .env("RUST_LOG", "error")
        .output()
        .unwrap()
}

fn arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

#[test]
fn validate_all_pass_exits_zero() {
    let fx = Fixture::new(8.0);
    let out = smad(&[
        "validate",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&fx.path("solution.json")),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("REQ-001      PASS   8m <= 10"), "{stdout}");
    assert!(stdout.contains("3 requirements: 3 passed"), "{stdout}");
}

#[test]
fn validate_failure_exits_one_with_json_report() {
    let fx = Fixture::new(15.0);
    let out = smad(&[
        "validate",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&fx.path("solution.json")),
        "--format",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["solutionId"], "sol-eo-1");
    assert_eq!(report["results"][0]["status"], "FAIL");
    assert_eq!(report["results"][0]["formula"], "15m <= 10");
    assert_eq!(report["summary"]["status"], "requirements_not_met");
}

#[test]
fn report_missing_counts_formula_less_requirements() {
    let fx = Fixture::new(8.0);
    let config = fx.write("smad.toml", "max_formula_len = 1024\n");
    let out = smad(&[
        "validate",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&fx.path("solution.json")),
        "--config",
        arg(&config),
        "--report-missing",
        "--format",
        "json",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(report["summary"]["total"], 5);
    assert_eq!(report["summary"]["errored"], 2);
    assert_eq!(report["results"][1]["error"], "No validation formula defined");
}

#[test]
fn check_single_requirement() {
    let fx = Fixture::new(8.0);
    let requirements = serde_json::json!({
        "requirements": [requirement_with_formula(
            "REQ-P",
            "passes >= 12",
            &[("passes", "groundStations[?(@.name=='Svalbard')].passesPerDay", "")],
        )]
    });
    let reqs = fx.write("wrapped.json", &requirements.to_string());
    let out = smad(&[
        "check",
        "--requirements",
        arg(&reqs),
        "--solution",
        arg(&fx.path("solution.json")),
        "--requirement-id",
        "REQ-P",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "REQ-P        PASS   14 >= 12\n");
}

#[test]
fn check_requirement_without_formula_is_error() {
    let fx = Fixture::new(8.0);
    let out = smad(&[
        "check",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&fx.path("solution.json")),
        "--requirement-id",
        "REQ-002",
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("ERROR  No validation formula defined"), "{stdout}");
}

#[test]
fn unknown_requirement_is_input_error() {
    let fx = Fixture::new(8.0);
    let out = smad(&[
        "check",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&fx.path("solution.json")),
        "--requirement-id",
        "REQ-404",
    ]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn malformed_solution_is_input_error() {
    let fx = Fixture::new(8.0);
    let broken = fx.write("broken.json", "{ not json");
    let out = smad(&[
        "validate",
        "--requirements",
        arg(&fx.path("requirements.json")),
        "--solution",
        arg(&broken),
    ]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn extract_prints_value() {
    let fx = Fixture::new(8.0);
    let out = smad(&[
        "extract",
        "--solution",
        arg(&fx.path("solution.json")),
        "components.find(c => c.type === 'payload').mass",
    ]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "20");
}

#[test]
fn eval_formula() {
    let out = smad(&["eval", "mass * 1.2 <= 30", "--var", "mass=20kg"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "20kg * 1.2 <= 30 => true\n");
}
