    use super::*;
    use crate::schema::{MutationConfig, ProvidersConfig, SchedulerConfig};

    #[test]
    fn test_default_config_is_valid() {
        let result = ConfigValidator::validate(&SmartmarksConfig::default());
        assert!(result.is_valid());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_debounce_is_error() {
        let config = SmartmarksConfig {
            scheduler: SchedulerConfig { debounce_ms: 0 },
            ..SmartmarksConfig::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(!result.is_valid());
        assert_eq!(result.errors[0].field, "scheduler.debounce_ms");
    }

    #[test]
    fn test_long_debounce_is_warning() {
        let config = SmartmarksConfig {
            scheduler: SchedulerConfig { debounce_ms: 120_000 },
            ..SmartmarksConfig::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_zero_move_attempts_is_error() {
        let config = SmartmarksConfig {
            mutation: MutationConfig {
                move_attempts: 0,
                move_retry_backoff_ms: 500,
            },
            ..SmartmarksConfig::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.errors.iter().any(|e| e.field == "mutation.move_attempts"));
    }

    #[test]
    fn test_zero_backoff_is_warning() {
        let config = SmartmarksConfig {
            mutation: MutationConfig {
                move_attempts: 2,
                move_retry_backoff_ms: 0,
            },
            ..SmartmarksConfig::default()
        };
        let result = ConfigValidator::validate(&config);
        assert!(result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.field == "mutation.move_retry_backoff_ms"));
    }

    #[test]
    fn test_invalid_endpoint_url() {
        let config = SmartmarksConfig {
            providers: ProvidersConfig {
                openai_url: "not a url".to_string(),
                ollama_base_url: "ftp://localhost:11434".to_string(),
                ..ProvidersConfig::default()
            },
            ..SmartmarksConfig::default()
        };
        let result = ConfigValidator::validate(&config);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors.iter().any(|e| e.field == "providers.openai_url"));
        assert!(result
            .errors
            .iter()
            .any(|e| e.field == "providers.ollama_base_url" && e.message.contains("ftp")));
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "scheduler.debounce_ms".to_string(),
            message: "must be greater than zero".to_string(),
        };
        assert_eq!(err.to_string(), "scheduler.debounce_ms: must be greater than zero");
    }
