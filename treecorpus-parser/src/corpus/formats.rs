//! Output formats for records and validation reports
//!
//!     - json: pretty printed JSON, for tools
//!     - summary: one line per record or outcome, for people

pub mod json;
pub mod summary;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use json::{corpora_to_json, records_to_json, report_to_json};
pub use summary::{line_diff, outcomes_summary, records_summary, SummaryOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Summary,
    Json,
}

impl OutputFormat {
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown format '{}', use summary or json", other)),
        }
    }
}
