//! Summarizer front-end that selects a provider from configuration.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::remote::RemoteSummarizer;
use crate::summary::{SummaryInfo, TextRankSummarizer};
use crate::Result;

/// A source of summaries, local or remote
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn summarize(&self, text: &str) -> Result<SummaryInfo>;
}

/// Summarizer that wraps the configured provider
pub struct Summarizer {
    provider: Arc<dyn SummaryProvider>,
}

impl Summarizer {
    /// Create a new summarizer based on configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let provider: Arc<dyn SummaryProvider> = match config.summarizer.provider.as_str() {
            "remote" => Arc::new(RemoteSummarizer::new(&config.summarizer)?),
            _ => Arc::new(TextRankSummarizer::new(config.summarizer.summary_ratio)),
        };

        Ok(Self { provider })
    }

    /// Summarize the given text with the configured provider
    pub async fn summarize(&self, text: &str) -> Result<SummaryInfo> {
        self.provider.summarize(text).await
    }
}

#[async_trait::async_trait]
impl SummaryProvider for TextRankSummarizer {
    async fn summarize(&self, text: &str) -> Result<SummaryInfo> {
        TextRankSummarizer::summarize(self, text)
    }
}

#[async_trait::async_trait]
impl SummaryProvider for RemoteSummarizer {
    async fn summarize(&self, text: &str) -> Result<SummaryInfo> {
        RemoteSummarizer::summarize(self, text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_provider_by_default() {
        let config = AppConfig::default();
        let summarizer = Summarizer::new(&config).unwrap();

        let info = summarizer
            .summarize("First sentence here. Second sentence there.")
            .await
            .unwrap();
        assert_eq!(info.original_sentence_count, 2);
    }

    #[test]
    fn test_remote_provider_requires_endpoint() {
        let mut config = AppConfig::default();
        config.summarizer.provider = "remote".to_string();
        assert!(Summarizer::new(&config).is_err());
    }
}
