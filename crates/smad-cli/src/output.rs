//! Human-readable rendering

use smad_model::ValidationResult;
use smad_validation::ValidationReport;
use std::io::{self, Write};

/// One line per result: id, status, then the formula or error
pub fn write_result(out: &mut impl Write, result: &ValidationResult) -> io::Result<()> {
    let detail = result.error.as_deref().unwrap_or(&result.formula);
    writeln!(out, "{:<12} {:<5}  {detail}", result.requirement_id, result.status)
}

/// Result lines followed by the summary
pub fn write_report(out: &mut impl Write, report: &ValidationReport) -> io::Result<()> {
    writeln!(out, "Solution: {}", report.solution_id)?;
    for result in &report.results {
        write_result(out, result)?;
    }
    let summary = &report.summary;
    writeln!(
        out,
        "{} requirements: {} passed, {} failed, {} errored ({:.1}%), status: {}",
        summary.total,
        summary.passed,
        summary.failed,
        summary.errored,
        summary.pass_rate,
        summary.status
    )
}
