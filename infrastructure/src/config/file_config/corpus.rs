//! Corpus configuration from TOML (`[corpus]` section)

use quotecycle_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw corpus configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// URL (`http://`, `https://`) or file path of the quote dataset
    pub location: String,
    /// HTTP request timeout
    pub timeout_seconds: u64,
    /// User-Agent header sent with HTTP requests
    pub user_agent: String,
}

impl Default for FileCorpusConfig {
    fn default() -> Self {
        Self {
            location: "assets/quotes.json".to_string(),
            timeout_seconds: 10,
            user_agent: concat!("quotecycle/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FileCorpusConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let location = self.location.trim();

        if location.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "corpus.location".to_string(),
                },
                "corpus.location must not be empty",
            ));
        } else if (location.starts_with("http://") || location.starts_with("https://"))
            && reqwest::Url::parse(location).is_err()
        {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "corpus.location".to_string(),
                    value: self.location.clone(),
                },
                format!("corpus.location: '{}' is not a valid URL", self.location),
            ));
        }

        if self.timeout_seconds == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "corpus.timeout_seconds".to_string(),
                    value: "0".to_string(),
                },
                "corpus.timeout_seconds is 0, every HTTP fetch will time out immediately",
            ));
        }

        issues
    }
}
