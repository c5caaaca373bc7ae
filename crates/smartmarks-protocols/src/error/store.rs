//! Bookmark and settings store errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Node not found: {0}")]
    NotFound(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Operation rejected: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_not_found() {
        let err = StoreError::NotFound("42".to_string());
        assert!(err.to_string().contains("Node not found"));
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_store_error_unavailable() {
        let err = StoreError::Unavailable("tree locked".to_string());
        assert!(err.to_string().contains("unavailable"));
    }

    #[test]
    fn test_store_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = StoreError::from(io_err);
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_store_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StoreError::from(json_err);
        assert!(err.to_string().contains("Serialization"));
    }
}
