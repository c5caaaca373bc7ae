//! Bookmark lifecycle events.

use serde::{Deserialize, Serialize};

use super::{BookmarkNode, ChangeInfo, MoveInfo};

/// A lifecycle event forwarded from the browser bookmark store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BookmarkEvent {
    Created { id: String, node: BookmarkNode },
    Changed { id: String, info: ChangeInfo },
    Moved { id: String, info: MoveInfo },
    Removed { id: String },
}

impl BookmarkEvent {
    /// The id of the bookmark the event refers to.
    pub fn bookmark_id(&self) -> &str {
        match self {
            Self::Created { id, .. }
            | Self::Changed { id, .. }
            | Self::Moved { id, .. }
            | Self::Removed { id } => id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Changed { .. } => "changed",
            Self::Moved { .. } => "moved",
            Self::Removed { .. } => "removed",
        }
    }
}
