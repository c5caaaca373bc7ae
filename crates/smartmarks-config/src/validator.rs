//! Configuration validation.

use url::Url;

use crate::schema::SmartmarksConfig;

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    fn warning(&mut self, field: &str, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.into(),
        });
    }
}

/// A configuration value that cannot be used.
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// A configuration value that works but is probably unintended.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    pub fn validate(config: &SmartmarksConfig) -> ValidationResult {
        let mut result = ValidationResult::default();

        if config.scheduler.debounce_ms == 0 {
            result.error("scheduler.debounce_ms", "must be greater than zero");
        } else if config.scheduler.debounce_ms > 60_000 {
            result.warning(
                "scheduler.debounce_ms",
                "bookmarks will wait more than a minute before filing",
            );
        }

        if config.mutation.move_attempts == 0 {
            result.error("mutation.move_attempts", "must be at least 1");
        }
        if config.mutation.move_retry_backoff_ms == 0 && config.mutation.move_attempts > 1 {
            result.warning(
                "mutation.move_retry_backoff_ms",
                "retries without a pause rarely outlast a creation race",
            );
        }

        let providers = &config.providers;
        for (field, value) in [
            ("providers.openai_url", &providers.openai_url),
            ("providers.deepseek_url", &providers.deepseek_url),
            ("providers.gemini_base_url", &providers.gemini_base_url),
            ("providers.ollama_base_url", &providers.ollama_base_url),
        ] {
            Self::check_http_url(&mut result, field, value);
        }

        if providers.request_timeout_secs == 0 {
            result.error("providers.request_timeout_secs", "must be greater than zero");
        }

        result
    }

    fn check_http_url(result: &mut ValidationResult, field: &str, value: &str) {
        match Url::parse(value) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => result.error(field, format!("unsupported scheme '{}'", url.scheme())),
            Err(e) => result.error(field, format!("invalid URL: {}", e)),
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
