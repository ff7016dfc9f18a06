//! Drives a grammar engine over test records.

use std::time::Instant;

use tracing::{debug, warn};

use super::engine::{EngineError, GrammarEngine};
use super::report::{Failure, FailureKind, Passing, ValidationOutcome, ValidationReport};
use crate::corpus::ast::TestRecord;
use crate::corpus::error::{CorpusError, CorpusResult};
use crate::corpus::normalization::trees_match;

pub struct Validator<E> {
    engine: E,
}

impl<E: GrammarEngine> Validator<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Validate a single record.
    ///
    /// Only an unusable engine is an error; everything else is an outcome.
    pub fn check(&self, record: &TestRecord) -> CorpusResult<ValidationOutcome> {
        let started = Instant::now();
        let rendered = self.engine.parse_and_render(&record.code);
        let duration_ms = started.elapsed().as_millis() as u64;

        let fail = |actual: String, kind: FailureKind| {
            ValidationOutcome::Fail(Failure {
                name: record.display_name.clone(),
                expected: record.expected_tree.clone(),
                actual,
                location: record.location.clone(),
                kind,
                duration_ms,
            })
        };

        let outcome = match rendered {
            Ok(actual) if trees_match(&record.expected_tree, &actual) => {
                ValidationOutcome::Pass(Passing {
                    name: record.display_name.clone(),
                    location: record.location.clone(),
                    duration_ms,
                })
            }
            Ok(actual) => fail(actual, FailureKind::Mismatch),
            Err(EngineError::Unavailable(message)) => {
                return Err(CorpusError::EngineLoad(message));
            }
            Err(EngineError::Timeout(limit)) => {
                warn!(
                    record = %record.display_name,
                    location = %record.location,
                    "engine timed out"
                );
                let limit_ms = limit.as_millis() as u64;
                fail(String::new(), FailureKind::Timeout { limit_ms })
            }
            Err(err) => {
                let message = err.to_string();
                fail(String::new(), FailureKind::EngineError { message })
            }
        };
        debug!(
            record = %record.display_name,
            location = %record.location,
            passed = outcome.is_pass(),
            duration_ms,
            "validated record"
        );
        Ok(outcome)
    }

    /// Validate records one after the other, returning outcomes in record order.
    pub fn run(&self, records: &[TestRecord]) -> CorpusResult<Vec<ValidationOutcome>> {
        records.iter().map(|record| self.check(record)).collect()
    }

    /// Validate records and split the outcomes into a report.
    pub fn validate(&self, records: &[TestRecord]) -> CorpusResult<ValidationReport> {
        Ok(self.run(records)?.into_iter().collect())
    }
}
