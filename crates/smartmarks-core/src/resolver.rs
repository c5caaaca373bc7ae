//! Folder resolution.

use std::sync::Arc;

use tracing::{debug, info, warn};

use smartmarks_protocols::{BookmarkNode, BookmarkStore, CategoryPath};

use crate::error::ResolveError;

/// Fixed ids of the catch-all container: Firefox, then Chrome.
pub const UNSORTED_FOLDER_IDS: &[&str] = &["unfiled_____", "2"];

/// Conventional titles of the catch-all container.
pub const UNSORTED_FOLDER_TITLES: &[&str] = &["Other Bookmarks", "Other"];

/// Finds or creates the folder for a category path.
pub struct FolderResolver {
    store: Arc<dyn BookmarkStore>,
}

impl FolderResolver {
    pub fn new(store: Arc<dyn BookmarkStore>) -> Self {
        Self { store }
    }

    /// Return the id of the deepest folder of `path`, creating missing levels
    /// under the unsorted container.
    ///
    /// With an unchanged tree, repeated calls return the same id and create
    /// nothing after the first.
    pub async fn ensure_folder_hierarchy(&self, path: &CategoryPath) -> Result<String, ResolveError> {
        let root = self.locate_unsorted_root().await?;
        debug!(root_id = %root.id, root_title = %root.title, "Using root folder");

        let mut parent_id = root.id;
        for segment in path.segments() {
            let children = match self.store.get_children(&parent_id).await {
                Ok(children) => children,
                Err(e) => {
                    warn!(parent_id = %parent_id, error = %e, "Listing folder failed, treating as empty");
                    Vec::new()
                }
            };

            parent_id = match children
                .into_iter()
                .find(|node| node.is_folder() && node.title == *segment)
            {
                Some(existing) => existing.id,
                None => {
                    let created = self
                        .store
                        .create_folder(&parent_id, segment)
                        .await
                        .map_err(|source| ResolveError::CreateFailed {
                            title: segment.clone(),
                            source,
                        })?;
                    info!(folder_id = %created.id, parent_id = %parent_id, title = %segment, "Created folder");
                    created.id
                }
            };
        }

        Ok(parent_id)
    }

    /// The top-level container new categories are created under.
    pub async fn locate_unsorted_root(&self) -> Result<BookmarkNode, ResolveError> {
        let tree = self
            .store
            .get_tree()
            .await
            .map_err(ResolveError::TreeUnavailable)?;
        let root = tree.into_iter().next().ok_or(ResolveError::NoRootFolder)?;
        select_unsorted_folder(root.children).ok_or(ResolveError::NoRootFolder)
    }
}

/// Pick the catch-all container among the browser root's children.
///
/// Known ids win over known titles; without either the last child is used.
pub fn select_unsorted_folder(children: Vec<BookmarkNode>) -> Option<BookmarkNode> {
    let by_id = children
        .iter()
        .position(|node| UNSORTED_FOLDER_IDS.contains(&node.id.as_str()));
    let by_title = || {
        children
            .iter()
            .position(|node| UNSORTED_FOLDER_TITLES.contains(&node.title.as_str()))
    };

    let index = by_id
        .or_else(by_title)
        .or_else(|| children.len().checked_sub(1))?;
    children.into_iter().nth(index)
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
