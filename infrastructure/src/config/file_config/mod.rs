//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod corpus;
mod output;
mod share;

pub use corpus::FileCorpusConfig;
pub use output::FileOutputConfig;
pub use share::FileShareConfig;

use quotecycle_domain::ConfigIssue;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Where the quote dataset lives and how to fetch it
    pub corpus: FileCorpusConfig,
    /// Permalink settings
    pub share: FileShareConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.corpus.validate());
        issues.extend(self.share.validate());
        issues
    }
}
