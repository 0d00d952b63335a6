//! Share configuration from TOML (`[share]` section)

use quotecycle_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw share configuration from TOML
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    /// Public page address; permalinks append `?id=<quote id>`
    pub base_url: Option<String>,
}

impl FileShareConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        match &self.base_url {
            Some(url) if reqwest::Url::parse(url).is_err() => vec![ConfigIssue::error(
                ConfigIssueCode::InvalidUrl {
                    field: "share.base_url".to_string(),
                    value: url.clone(),
                },
                format!("share.base_url: '{}' is not a valid URL", url),
            )],
            _ => Vec::new(),
        }
    }
}
