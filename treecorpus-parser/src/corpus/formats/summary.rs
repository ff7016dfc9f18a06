//! Human readable summaries

use similar::{ChangeTag, TextDiff};

use crate::corpus::ast::TestRecord;
use crate::corpus::validation::{
    Failure, FailureKind, ReportSummary, ValidationOutcome, ValidationReport,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryOptions {
    /// Show a line diff of the raw trees under each mismatch
    pub show_diff: bool,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self { show_diff: true }
    }
}

/// One line per record: location, then name.
pub fn records_summary(records: &[TestRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!("{}  {}\n", record.location, record.display_name));
    }
    let noun = if records.len() == 1 {
        "record"
    } else {
        "records"
    };
    out.push_str(&format!("{} {}\n", records.len(), noun));
    out
}

/// One line per outcome in record order, failure details underneath, counts at the end.
pub fn outcomes_summary(outcomes: &[ValidationOutcome], options: SummaryOptions) -> String {
    let mut out = String::new();
    for outcome in outcomes {
        match outcome {
            ValidationOutcome::Pass(pass) => {
                out.push_str(&format!("✓ {} ({})\n", pass.name, pass.location));
            }
            ValidationOutcome::Fail(fail) => {
                out.push_str(&format!("✗ {} ({})\n", fail.name, fail.location));
                write_failure(&mut out, fail, options);
            }
        }
    }

    let report: ValidationReport = outcomes.iter().cloned().collect();
    let ReportSummary {
        passed,
        failed,
        engine_errors,
        ..
    } = report.summary();
    out.push('\n');
    out.push_str(&format!("{} passed, {} failed", passed, failed));
    if engine_errors > 0 {
        let noun = if engine_errors == 1 {
            "engine error"
        } else {
            "engine errors"
        };
        out.push_str(&format!(", {} {}", engine_errors, noun));
    }
    out.push('\n');
    out
}

fn write_failure(out: &mut String, fail: &Failure, options: SummaryOptions) {
    match &fail.kind {
        FailureKind::Mismatch => {
            let (expected, actual) = fail.normalized();
            out.push_str(&format!("    expected: {}\n", expected));
            out.push_str(&format!("    actual:   {}\n", actual));
            if options.show_diff {
                out.push_str("    diff:\n");
                for line in line_diff(&fail.expected, &fail.actual).lines() {
                    out.push_str(&format!("      {}\n", line));
                }
            }
        }
        FailureKind::EngineError { message } => {
            out.push_str(&format!("    engine error: {}\n", message));
        }
        FailureKind::Timeout { limit_ms } => {
            out.push_str(&format!("    timed out after {}ms\n", limit_ms));
        }
    }
}

/// Render a `-`/`+` line diff of two texts.
pub fn line_diff(expected: &str, actual: &str) -> String {
    let diff = TextDiff::from_lines(expected, actual);
    let mut out = String::new();
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => '-',
            ChangeTag::Insert => '+',
            ChangeTag::Equal => ' ',
        };
        out.push(sign);
        out.push_str(change.value().trim_end_matches('\n'));
        out.push('\n');
    }
    out
}
