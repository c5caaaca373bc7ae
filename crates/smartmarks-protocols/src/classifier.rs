//! Classification oracle contract.

use async_trait::async_trait;

use crate::types::{CategoryPath, Settings};

/// Maps a bookmark to a category path.
///
/// Implementations never fail loudly: any configuration gap, transport
/// failure or unusable answer is reported through logging and surfaces as
/// `None`, which callers treat as "leave the bookmark where it is".
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, title: &str, url: &str, settings: &Settings) -> Option<CategoryPath>;
}
