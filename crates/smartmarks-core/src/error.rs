//! Pipeline errors.

use thiserror::Error;

use smartmarks_protocols::StoreError;

/// Failure to materialize a category path.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("Bookmark tree unavailable: {0}")]
    TreeUnavailable(#[source] StoreError),

    #[error("No top-level folder to file bookmarks under")]
    NoRootFolder,

    #[error("Failed to create folder '{title}': {source}")]
    CreateFailed {
        title: String,
        #[source]
        source: StoreError,
    },
}

/// Failure while filing a classified bookmark.
#[derive(Debug, Error)]
pub enum MutationError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Moving bookmark {id} failed after {attempts} attempts: {source}")]
    Move {
        id: String,
        attempts: u32,
        #[source]
        source: StoreError,
    },

    #[error("Tagging bookmark {id} failed: {source}")]
    Rename {
        id: String,
        #[source]
        source: StoreError,
    },

    #[error("Bookmark {0} disappeared while being filed")]
    Vanished(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_error_display() {
        let err = ResolveError::CreateFailed {
            title: "Development".to_string(),
            source: StoreError::Rejected("quota".to_string()),
        };
        assert!(err.to_string().contains("Development"));
        assert!(err.to_string().contains("quota"));
    }

    #[test]
    fn test_mutation_error_from_resolve() {
        let err = MutationError::from(ResolveError::NoRootFolder);
        assert!(matches!(err, MutationError::Resolve(ResolveError::NoRootFolder)));
        assert!(err.to_string().contains("top-level folder"));
    }

    #[test]
    fn test_move_error_display() {
        let err = MutationError::Move {
            id: "42".to_string(),
            attempts: 2,
            source: StoreError::Unavailable("busy".to_string()),
        };
        let display = err.to_string();
        assert!(display.contains("42"));
        assert!(display.contains("2 attempts"));
    }
}
