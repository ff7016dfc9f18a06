use crate::corpus::ast::{ParsedCorpus, TestRecord};
use crate::corpus::error::CorpusResult;
use crate::corpus::validation::ValidationReport;

pub fn records_to_json(records: &[TestRecord]) -> CorpusResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn corpora_to_json(corpora: &[ParsedCorpus]) -> CorpusResult<String> {
    Ok(serde_json::to_string_pretty(corpora)?)
}

pub fn report_to_json(report: &ValidationReport) -> CorpusResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
