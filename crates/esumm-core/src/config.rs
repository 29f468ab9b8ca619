use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub summarizer: SummarizerConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Summarizer provider: "local" (built-in ranking engine) or "remote" (HTTP service)
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Base URL of the remote summarization service (for the "remote" provider)
    #[serde(default)]
    pub endpoint: Option<String>,
    /// Request timeout in seconds for the remote provider
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Fraction of the input sentences kept in the summary (0.0-1.0)
    #[serde(default = "default_summary_ratio")]
    pub summary_ratio: f64,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            endpoint: None,
            request_timeout_secs: default_timeout(),
            summary_ratio: default_summary_ratio(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Reveal animation configuration
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            reveal: RevealConfig::default(),
        }
    }
}

/// Configuration for the character-by-character summary reveal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Enable the reveal animation (disabled shows the summary instantly)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Delay in milliseconds between revealed characters
    #[serde(default = "default_char_interval")]
    pub char_interval_ms: u64,
    /// Frame rate used while a reveal is in progress
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u16,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            char_interval_ms: default_char_interval(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_summary_ratio() -> f64 {
    0.6
}

fn default_tick_rate() -> u64 {
    100
}

fn default_char_interval() -> u64 {
    10
}

fn default_animation_fps() -> u16 {
    60
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> crate::Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(&config_path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/esumm/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("esumm")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.summarizer.provider, "local");
        assert!((config.summarizer.summary_ratio - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.reveal.enabled);
        assert_eq!(config.ui.reveal.char_interval_ms, 10);
        assert_eq!(config.ui.reveal.animation_fps, 60);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [summarizer]
            provider = "remote"
            endpoint = "http://localhost:8080"

            [ui.reveal]
            char_interval_ms = 25
            "#,
        )
        .unwrap();

        assert_eq!(config.summarizer.provider, "remote");
        assert_eq!(
            config.summarizer.endpoint.as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(config.summarizer.request_timeout_secs, 30);
        assert_eq!(config.ui.reveal.char_interval_ms, 25);
        assert!(config.ui.reveal.enabled);
    }
}
