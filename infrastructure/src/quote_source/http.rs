//! HTTP quote source

use super::parse_quotes;
use async_trait::async_trait;
use quotecycle_application::{QuoteSource, QuoteSourceError};
use quotecycle_domain::Quote;
use std::time::Duration;
use tracing::debug;

/// Maximum accepted corpus document size (10 MB)
const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Fetches the corpus document with a single GET request.
#[derive(Debug, Clone)]
pub struct HttpQuoteSource {
    client: reqwest::Client,
    url: String,
    max_body_size: usize,
}

impl HttpQuoteSource {
    pub fn new(
        url: impl Into<String>,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, QuoteSourceError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| QuoteSourceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
            max_body_size: MAX_BODY_SIZE,
        })
    }

    fn too_large(&self) -> QuoteSourceError {
        QuoteSourceError::Transport(format!(
            "response too large (max: {} bytes)",
            self.max_body_size
        ))
    }
}

#[async_trait]
impl QuoteSource for HttpQuoteSource {
    async fn fetch_quotes(&self) -> Result<Vec<Quote>, QuoteSourceError> {
        let mut response = self
            .client
            .get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| QuoteSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteSourceError::Status {
                status: status.as_u16(),
                location: self.url.clone(),
            });
        }

        if response.content_length().unwrap_or(0) > self.max_body_size as u64 {
            return Err(self.too_large());
        }

        // Content-Length may be absent, so the cap is enforced while streaming
        let mut body = Vec::new();
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| QuoteSourceError::Transport(format!("failed to read body: {}", e)))?
        {
            if body.len() + chunk.len() > self.max_body_size {
                return Err(self.too_large());
            }
            body.extend_from_slice(&chunk);
        }

        debug!("Fetched {} bytes from {}", body.len(), self.url);
        parse_quotes(&body)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
