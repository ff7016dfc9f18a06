//! Validation outcomes and the report built from them.

use serde::Serialize;

use crate::corpus::ast::Location;
use crate::corpus::normalization::normalize_tree;

/// A record whose rendered tree matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Passing {
    pub name: String,
    pub location: Location,
    pub duration_ms: u64,
}

/// Why a record failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FailureKind {
    /// The engine rendered a tree that differs from the expected one
    Mismatch,
    /// The engine rejected the code
    EngineError { message: String },
    /// The engine did not answer in time
    Timeout { limit_ms: u64 },
}

/// A record that did not pass. `expected` and `actual` are kept as written and as rendered, so
/// they can be diffed by a human; see [Failure::normalized] for the compared forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    pub name: String,
    pub expected: String,
    pub actual: String,
    pub location: Location,
    #[serde(flatten)]
    pub kind: FailureKind,
    pub duration_ms: u64,
}

impl Failure {
    /// The (expected, actual) pair as it was compared.
    pub fn normalized(&self) -> (String, String) {
        (normalize_tree(&self.expected), normalize_tree(&self.actual))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass(Passing),
    Fail(Failure),
}

impl ValidationOutcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass(_))
    }

    pub fn name(&self) -> &str {
        match self {
            ValidationOutcome::Pass(pass) => &pass.name,
            ValidationOutcome::Fail(fail) => &fail.name,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            ValidationOutcome::Pass(pass) => &pass.location,
            ValidationOutcome::Fail(fail) => &fail.location,
        }
    }
}

/// Passing and failing records, each list in record order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub passing: Vec<Passing>,
    pub failing: Vec<Failure>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, outcome: ValidationOutcome) {
        match outcome {
            ValidationOutcome::Pass(pass) => self.passing.push(pass),
            ValidationOutcome::Fail(fail) => self.failing.push(fail),
        }
    }

    pub fn total(&self) -> usize {
        self.passing.len() + self.failing.len()
    }

    pub fn is_success(&self) -> bool {
        self.failing.is_empty()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total: self.total(),
            passed: self.passing.len(),
            failed: self.failing.len(),
            engine_errors: self
                .failing
                .iter()
                .filter(|f| !matches!(f.kind, FailureKind::Mismatch))
                .count(),
        }
    }
}

impl FromIterator<ValidationOutcome> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationOutcome>>(iter: I) -> Self {
        let mut report = ValidationReport::new();
        for outcome in iter {
            report.push(outcome);
        }
        report
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    /// Failures caused by the engine rather than by a tree mismatch
    pub engine_errors: usize,
}
