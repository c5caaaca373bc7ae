//! Configuration loader.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::SmartmarksConfig;

const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<SmartmarksConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a file, or defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<SmartmarksConfig, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(_)) => Ok(SmartmarksConfig::default()),
            other => other,
        }
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<SmartmarksConfig, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: SmartmarksConfig = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Expand environment variables in the format `${VAR}`.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(ENV_VAR_PATTERN).map_err(|e| ConfigError::InvalidValue {
            field: "env pattern".to_string(),
            message: e.to_string(),
        })?;

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let var_value = std::env::var(var_name)
                .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
            result = result.replace(&cap[0], &var_value);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.smartmarks`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_empty_config() {
        let config = ConfigLoader::load_str("").unwrap();
        assert_eq!(config.scheduler.debounce_ms, 2000);
        assert_eq!(config.mutation.move_attempts, 2);
    }

    #[test]
    fn test_expand_path() {
        let expanded = ConfigLoader::expand_path("~/.smartmarks");
        assert!(!expanded.starts_with('~'));
    }

    #[test]
    fn test_load_partial_config() {
        let content = r#"
            [scheduler]
            debounce_ms = 3500

            [mutation]
            move_retry_backoff_ms = 250
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.scheduler.debounce_ms, 3500);
        assert_eq!(config.mutation.move_retry_backoff_ms, 250);
        assert_eq!(config.mutation.move_attempts, 2);
    }

    #[test]
    fn test_load_provider_overrides() {
        let content = r#"
            [providers]
            openai_url = "http://127.0.0.1:9000/v1/chat/completions"
            request_timeout_secs = 5

            [logging]
            level = "debug"
            file = false
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.providers.openai_url, "http://127.0.0.1:9000/v1/chat/completions");
        assert_eq!(config.providers.request_timeout_secs, 5);
        assert_eq!(config.providers.deepseek_url, "https://api.deepseek.com/chat/completions");
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.file);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[scheduler]").unwrap();
        writeln!(file, "debounce_ms = 1000").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();
        assert_eq!(config.scheduler.debounce_ms, 1000);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load(Path::new("/nonexistent/path/smartmarks.toml"));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config =
            ConfigLoader::load_or_default(Path::new("/nonexistent/path/smartmarks.toml")).unwrap();
        assert_eq!(config.scheduler.debounce_ms, 2000);
    }

    #[test]
    fn test_env_var_expansion() {
        // SAFETY: the variable name is unique to this test.
        unsafe { std::env::set_var("SMARTMARKS_TEST_OLLAMA", "http://gpu-box:11434") };
        let content = r#"
            [providers]
            ollama_base_url = "${SMARTMARKS_TEST_OLLAMA}"
        "#;
        let config = ConfigLoader::load_str(content).unwrap();
        assert_eq!(config.providers.ollama_base_url, "http://gpu-box:11434");
    }

    #[test]
    fn test_env_var_missing() {
        let content = r#"
            [providers]
            openai_url = "${SMARTMARKS_TEST_DEFINITELY_UNSET}"
        "#;
        let result = ConfigLoader::load_str(content);
        assert!(matches!(result, Err(ConfigError::EnvVarNotSet(name)) if name == "SMARTMARKS_TEST_DEFINITELY_UNSET"));
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConfigLoader::load_str("[scheduler\ndebounce_ms = ");
        assert!(matches!(result, Err(ConfigError::TomlParse(_))));
    }
}
