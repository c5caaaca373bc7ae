//! Store contracts consumed by the filing pipeline.

mod memory;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{BookmarkNode, Settings};

pub use memory::{MemoryBookmarkStore, MemorySettingsStore};

/// Browser bookmark store.
///
/// Every call may suspend and every call may fail.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Look up a single node. `Ok(None)` when the id no longer exists.
    async fn get(&self, id: &str) -> Result<Option<BookmarkNode>, StoreError>;

    /// Full tree; the first element is the browser root.
    async fn get_tree(&self) -> Result<Vec<BookmarkNode>, StoreError>;

    /// Direct children of a folder, in display order.
    async fn get_children(&self, id: &str) -> Result<Vec<BookmarkNode>, StoreError>;

    /// Create a folder as the last child of `parent_id`.
    async fn create_folder(&self, parent_id: &str, title: &str) -> Result<BookmarkNode, StoreError>;

    /// Re-parent a node.
    async fn move_node(&self, id: &str, parent_id: &str) -> Result<BookmarkNode, StoreError>;

    /// Rename a node.
    async fn update_title(&self, id: &str, title: &str) -> Result<BookmarkNode, StoreError>;
}

/// Settings persistence.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current settings snapshot.
    async fn load(&self) -> Result<Settings, StoreError>;

    /// Replace the stored settings.
    async fn save(&self, settings: &Settings) -> Result<(), StoreError>;
}
