//! Lexing for corpus files
//!
//!     Corpus files are line oriented: every decision the parser makes depends on a single line
//!     and the state accumulated so far. Lexing therefore stops at splitting the text into lines
//!     and tagging each one with its [LineType](line_classification::LineType).
//!
//!     See [line_classification] for the marker rules and [lines] for the line splitter.

pub mod line_classification;
pub mod lines;

pub use line_classification::{classify_line, header_name, LineType};
pub use lines::{classified_lines, ClassifiedLine};
