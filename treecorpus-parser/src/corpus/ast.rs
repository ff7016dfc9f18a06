//! Corpus data model
//!
//!     A [CorpusDocument] is the immutable input of a parse pass. The pass produces a
//!     [ParsedCorpus]: an ordered list of [Section]s, each owning its [Example]s. Downstream
//!     consumers mostly want the flattened [TestRecord] view, one per example, which carries
//!     everything needed to run and report on a single test.
//!
//!     Nothing here is mutated after the parse pass returns.

mod document;
mod location;
mod record;
mod section;

pub use document::{CorpusDocument, ParsedCorpus};
pub use location::Location;
pub use record::TestRecord;
pub use section::{Example, Section};
