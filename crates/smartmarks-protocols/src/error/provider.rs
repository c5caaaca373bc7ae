//! Classification provider errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("No credential configured for provider {0}")]
    MissingCredential(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Provider returned an empty answer")]
    EmptyResponse,
}

impl ProviderError {
    /// Configuration gaps are expected and skipped quietly.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCredential(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_api_error() {
        let err = ProviderError::ApiError {
            status: 401,
            message: "invalid key".to_string(),
        };
        assert!(err.to_string().contains("401"));
        assert!(err.to_string().contains("invalid key"));
    }

    #[test]
    fn test_provider_error_missing_credential() {
        let err = ProviderError::MissingCredential("gemini".to_string());
        assert!(err.to_string().contains("gemini"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_provider_error_network_is_not_configuration() {
        let err = ProviderError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_provider_error_debug() {
        let err = ProviderError::EmptyResponse;
        assert!(format!("{:?}", err).contains("EmptyResponse"));
    }
}
