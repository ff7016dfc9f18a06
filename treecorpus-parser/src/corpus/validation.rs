//! Validation of test records against a grammar engine
//!
//!     The grammar engine is an outside collaborator: all the validator needs from it is
//!     `parse(source) -> tree` and `render(tree) -> text`, captured by [GrammarEngine]. For each
//!     record the validator renders the record's code, normalizes both trees and files the record
//!     as passing or failing.
//!
//! Failure Policy
//!
//!     A record whose trees differ, or whose code the engine rejects or times out on, fails on
//!     its own; the run carries on with the next record. Only an engine that is unusable as a
//!     whole ([EngineError::Unavailable]) stops the run, as [CorpusError::EngineLoad].
//!
//!     [CorpusError::EngineLoad]: crate::corpus::error::CorpusError::EngineLoad

pub mod command;
pub mod engine;
pub mod report;
pub mod validator;

pub use command::{CommandEngine, CommandSpec, CommandTree};
pub use engine::{EngineError, GrammarEngine};
pub use report::{Failure, FailureKind, Passing, ReportSummary, ValidationOutcome, ValidationReport};
pub use validator::Validator;
