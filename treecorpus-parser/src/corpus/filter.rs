//! Selecting test records by name.

use regex::Regex;

use crate::corpus::ast::TestRecord;
use crate::corpus::error::{CorpusError, CorpusResult};

/// Keeps records whose display name matches any include pattern (every record, when there are
/// none) and no exclude pattern.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    include: Vec<Regex>,
    exclude: Vec<Regex>,
}

impl RecordFilter {
    pub fn new<I, E, S, T>(include: I, exclude: E) -> CorpusResult<Self>
    where
        I: IntoIterator<Item = S>,
        E: IntoIterator<Item = T>,
        S: AsRef<str>,
        T: AsRef<str>,
    {
        Ok(Self {
            include: compile(include)?,
            exclude: compile(exclude)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    pub fn matches(&self, record: &TestRecord) -> bool {
        let name = record.display_name.as_str();
        (self.include.is_empty() || self.include.iter().any(|re| re.is_match(name)))
            && !self.exclude.iter().any(|re| re.is_match(name))
    }

    pub fn apply(&self, records: Vec<TestRecord>) -> Vec<TestRecord> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn compile<I, S>(patterns: I) -> CorpusResult<Vec<Regex>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    patterns
        .into_iter()
        .map(|pattern| {
            let pattern = pattern.as_ref();
            Regex::new(pattern).map_err(|e| CorpusError::InvalidFilter {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::parsing::parse_corpus;

    fn names(records: &[TestRecord]) -> Vec<&str> {
        records.iter().map(|r| r.display_name.as_str()).collect()
    }

    fn sample() -> Vec<TestRecord> {
        parse_corpus(
            "=== literals ===\n--- numbers ---\n1;\n(n)\n--- strings ---\n\"s\";\n(s)\n\
             === calls ===\n--- simple ---\nf();\n(c)\n",
        )
        .records()
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let filter = RecordFilter::default();
        assert_eq!(filter.apply(sample()).len(), 3);
    }

    #[test]
    fn include_and_exclude_combine() {
        let filter = RecordFilter::new(["^literals"], ["strings"]).unwrap();
        assert_eq!(names(&filter.apply(sample())), ["literals numbers"]);

        let filter = RecordFilter::new(Vec::<&str>::new(), ["literals"]).unwrap();
        assert_eq!(names(&filter.apply(sample())), ["calls simple"]);
    }

    #[test]
    fn invalid_patterns_are_reported() {
        let err = RecordFilter::new(["("], Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, CorpusError::InvalidFilter { ref pattern, .. } if pattern == "("));
    }
}
