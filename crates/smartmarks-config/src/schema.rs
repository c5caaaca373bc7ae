//! Configuration schema definitions.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::loader::ConfigLoader;

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SmartmarksConfig {
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    #[serde(default)]
    pub mutation: MutationConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub settings: SettingsConfig,
}

/// Debounce scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Quiet period after the last create/change event before filing.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl SchedulerConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    2000
}

/// Bookmark mutation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationConfig {
    /// Total move attempts, including the first.
    #[serde(default = "default_move_attempts")]
    pub move_attempts: u32,

    /// Fixed wait between move attempts.
    #[serde(default = "default_move_retry_backoff_ms")]
    pub move_retry_backoff_ms: u64,
}

impl MutationConfig {
    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.move_retry_backoff_ms)
    }
}

impl Default for MutationConfig {
    fn default() -> Self {
        Self {
            move_attempts: default_move_attempts(),
            move_retry_backoff_ms: default_move_retry_backoff_ms(),
        }
    }
}

fn default_move_attempts() -> u32 {
    2
}

fn default_move_retry_backoff_ms() -> u64 {
    500
}

/// Provider endpoints and HTTP timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default = "default_openai_url")]
    pub openai_url: String,

    #[serde(default = "default_deepseek_url")]
    pub deepseek_url: String,

    /// Prefix the model name and `:generateContent` are appended to.
    #[serde(default = "default_gemini_base_url")]
    pub gemini_base_url: String,

    /// Used when the `ollama` credential slot is empty.
    #[serde(default = "default_ollama_base_url")]
    pub ollama_base_url: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai_url: default_openai_url(),
            deepseek_url: default_deepseek_url(),
            gemini_base_url: default_gemini_base_url(),
            ollama_base_url: default_ollama_base_url(),
            request_timeout_secs: default_request_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_openai_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_deepseek_url() -> String {
    "https://api.deepseek.com/chat/completions".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta/models/".to_string()
}

fn default_ollama_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_connect_timeout() -> u64 {
    10
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write a daily-rotated log file in addition to the console.
    #[serde(default = "default_true")]
    pub file: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl LoggingConfig {
    /// Log directory, `~/.smartmarks/logs` unless configured.
    pub fn log_dir(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => PathBuf::from(ConfigLoader::expand_path(dir)),
            None => smartmarks_dir().join("logs"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_true(),
            dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings file location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl SettingsConfig {
    /// Settings file, `~/.smartmarks/settings.json` unless configured.
    pub fn settings_path(&self) -> PathBuf {
        match &self.path {
            Some(path) => PathBuf::from(ConfigLoader::expand_path(path)),
            None => smartmarks_dir().join("settings.json"),
        }
    }
}

/// The `.smartmarks` directory under the user's home.
pub fn smartmarks_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(".smartmarks"))
        .unwrap_or_else(|| PathBuf::from(".smartmarks"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SmartmarksConfig::default();
        assert_eq!(config.scheduler.debounce(), Duration::from_millis(2000));
        assert_eq!(config.mutation.move_attempts, 2);
        assert_eq!(config.mutation.retry_backoff(), Duration::from_millis(500));
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file);
    }

    #[test]
    fn test_default_provider_endpoints() {
        let providers = ProvidersConfig::default();
        assert_eq!(providers.openai_url, "https://api.openai.com/v1/chat/completions");
        assert_eq!(providers.deepseek_url, "https://api.deepseek.com/chat/completions");
        assert!(providers.gemini_base_url.ends_with("/v1beta/models/"));
        assert_eq!(providers.ollama_base_url, "http://localhost:11434");
    }

    #[test]
    fn test_log_dir_default_and_override() {
        let logging = LoggingConfig::default();
        assert!(logging.log_dir().ends_with(".smartmarks/logs"));

        let custom = LoggingConfig {
            dir: Some("/var/log/smartmarks".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(custom.log_dir(), PathBuf::from("/var/log/smartmarks"));
    }

    #[test]
    fn test_settings_path_default() {
        let settings = SettingsConfig::default();
        assert!(settings.settings_path().ends_with(".smartmarks/settings.json"));
    }

    #[test]
    fn test_config_serialization() {
        let config = SmartmarksConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("debounce_ms"));
        assert!(toml_str.contains("move_retry_backoff_ms"));
    }
}
