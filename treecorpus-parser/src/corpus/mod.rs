//! Main module for corpus library functionality

pub mod ast;
pub mod error;
pub mod filter;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod normalization;
pub mod parsing;
pub mod testing;
pub mod validation;

pub use ast::{CorpusDocument, Example, Location, ParsedCorpus, Section, TestRecord};
pub use error::{CorpusError, CorpusResult};
pub use parsing::{parse_corpus, parse_corpus_with, Dialect};
