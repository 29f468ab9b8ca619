//! Client for a remote summarization service.
//!
//! The service accepts the raw input text as a `text/plain` POST body on
//! `/summarize` and answers with a JSON [`SummaryInfo`] object. Failures are
//! not retried; callers surface a generic message to the user.

use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

use crate::config::SummarizerConfig;
use crate::summary::SummaryInfo;
use crate::{Error, Result};

pub struct RemoteSummarizer {
    client: Client,
    endpoint: Url,
}

impl RemoteSummarizer {
    /// Create a client for the configured service endpoint
    pub fn new(config: &SummarizerConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .as_deref()
            .ok_or_else(|| Error::Config("remote summarizer endpoint not configured".to_string()))?;

        // Keep a trailing slash so Url::join appends instead of replacing
        let normalized = format!("{}/", endpoint.trim_end_matches('/'));
        let endpoint = Url::parse(&normalized)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(Error::Http)?;

        Ok(Self { client, endpoint })
    }

    /// Submit text for summarization and parse the response
    pub async fn summarize(&self, text: &str) -> Result<SummaryInfo> {
        let url = self.endpoint.join("summarize")?;

        tracing::debug!("Requesting summary from {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/plain")
            .body(text.to_string())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Summarizer service returned HTTP {}", status);
            return Err(Error::Summarize(format!(
                "summarizer service returned HTTP {}",
                status
            )));
        }

        Ok(response.json::<SummaryInfo>().await?)
    }
}
