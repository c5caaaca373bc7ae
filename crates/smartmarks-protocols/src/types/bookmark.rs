//! Bookmark tree nodes.

use serde::{Deserialize, Serialize};

/// A node of the browser bookmark tree.
///
/// Bookmarks carry a `url`; folders do not. The same shape is used for
/// single lookups (where `children` is empty) and for tree snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkNode {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BookmarkNode>,
}

impl BookmarkNode {
    /// Create a folder node.
    pub fn folder(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            title: title.into(),
            url: None,
            children: Vec::new(),
        }
    }

    /// Create a bookmark node.
    pub fn bookmark(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            title: title.into(),
            url: Some(url.into()),
            children: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_children(mut self, children: Vec<BookmarkNode>) -> Self {
        self.children = children;
        self
    }

    /// Folders are nodes without a URL.
    pub fn is_folder(&self) -> bool {
        self.url.is_none()
    }
}

/// Fields reported by a bookmark-changed event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Placement reported by a bookmark-moved event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInfo {
    pub parent_id: String,

    #[serde(default)]
    pub index: usize,

    pub old_parent_id: String,

    #[serde(default)]
    pub old_index: usize,
}
