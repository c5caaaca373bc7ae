//! In-memory stores for testing and embedding.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use super::{BookmarkStore, SettingsStore};
use crate::error::StoreError;
use crate::types::{BookmarkNode, Settings};

#[derive(Debug, Clone)]
struct StoredNode {
    parent_id: Option<String>,
    title: String,
    url: Option<String>,
    children: Vec<String>,
}

#[derive(Debug, Default)]
struct TreeState {
    nodes: HashMap<String, StoredNode>,
    root_id: String,
    next_id: u64,
    fail_tree: bool,
    fail_children: bool,
    pending_move_failures: u32,
    create_calls: usize,
    move_calls: usize,
    update_calls: usize,
}

impl TreeState {
    fn allocate_id(&mut self) -> String {
        self.next_id += 1;
        self.next_id.to_string()
    }

    fn insert(
        &mut self,
        parent_id: &str,
        title: &str,
        url: Option<String>,
    ) -> Result<String, StoreError> {
        match self.nodes.get(parent_id) {
            Some(parent) if parent.url.is_none() => {}
            Some(_) => {
                return Err(StoreError::Rejected(format!(
                    "parent {parent_id} is not a folder"
                )));
            }
            None => return Err(StoreError::NotFound(parent_id.to_string())),
        }

        let id = self.allocate_id();
        self.nodes.insert(
            id.clone(),
            StoredNode {
                parent_id: Some(parent_id.to_string()),
                title: title.to_string(),
                url,
                children: Vec::new(),
            },
        );
        if let Some(parent) = self.nodes.get_mut(parent_id) {
            parent.children.push(id.clone());
        }
        Ok(id)
    }

    fn snapshot(&self, id: &str, recursive: bool) -> Option<BookmarkNode> {
        let node = self.nodes.get(id)?;
        let children = if recursive {
            node.children
                .iter()
                .filter_map(|child| self.snapshot(child, true))
                .collect()
        } else {
            Vec::new()
        };
        Some(BookmarkNode {
            id: id.to_string(),
            parent_id: node.parent_id.clone(),
            title: node.title.clone(),
            url: node.url.clone(),
            children,
        })
    }

    fn detach(&mut self, id: &str) {
        let parent_id = self.nodes.get(id).and_then(|n| n.parent_id.clone());
        if let Some(parent) = parent_id.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|child| child != id);
        }
    }

    fn remove_subtree(&mut self, id: &str) {
        if let Some(node) = self.nodes.remove(id) {
            for child in node.children {
                self.remove_subtree(&child);
            }
        }
    }
}

/// In-memory bookmark tree.
///
/// Ids are allocated sequentially after the fixed root containers. The
/// store counts mutating calls and can be told to fail tree fetches,
/// children listings or a number of upcoming moves.
pub struct MemoryBookmarkStore {
    state: Mutex<TreeState>,
}

impl MemoryBookmarkStore {
    /// Chrome layout: root `0` holding `1` (Bookmarks bar) and `2` (Other bookmarks).
    pub fn new() -> Self {
        Self::with_roots("0", &[("1", "Bookmarks bar"), ("2", "Other bookmarks")])
    }

    /// Firefox layout with its fixed container ids.
    pub fn firefox() -> Self {
        Self::with_roots(
            "root________",
            &[
                ("menu________", "Bookmarks Menu"),
                ("toolbar_____", "Bookmarks Toolbar"),
                ("unfiled_____", "Other Bookmarks"),
                ("mobile______", "Mobile Bookmarks"),
            ],
        )
    }

    /// Custom layout with the given top-level containers under `root_id`.
    pub fn with_roots(root_id: &str, containers: &[(&str, &str)]) -> Self {
        let mut state = TreeState {
            root_id: root_id.to_string(),
            next_id: 100,
            ..TreeState::default()
        };

        state.nodes.insert(
            root_id.to_string(),
            StoredNode {
                parent_id: None,
                title: String::new(),
                url: None,
                children: containers.iter().map(|(id, _)| id.to_string()).collect(),
            },
        );
        for (id, title) in containers {
            state.nodes.insert(
                id.to_string(),
                StoredNode {
                    parent_id: Some(root_id.to_string()),
                    title: title.to_string(),
                    url: None,
                    children: Vec::new(),
                },
            );
        }

        Self {
            state: Mutex::new(state),
        }
    }

    /// Insert a bookmark the way the browser does when the user saves a page.
    pub fn add_bookmark(
        &self,
        parent_id: &str,
        title: &str,
        url: &str,
    ) -> Result<BookmarkNode, StoreError> {
        let mut state = self.state.lock();
        let id = state.insert(parent_id, title, Some(url.to_string()))?;
        state
            .snapshot(&id, false)
            .ok_or(StoreError::NotFound(id))
    }

    /// Insert a folder without counting it as a pipeline-created folder.
    pub fn add_folder(&self, parent_id: &str, title: &str) -> Result<BookmarkNode, StoreError> {
        let mut state = self.state.lock();
        let id = state.insert(parent_id, title, None)?;
        state
            .snapshot(&id, false)
            .ok_or(StoreError::NotFound(id))
    }

    /// Delete a node and its descendants.
    pub fn remove(&self, id: &str) {
        let mut state = self.state.lock();
        state.detach(id);
        state.remove_subtree(id);
    }

    /// Synchronous lookup for assertions.
    pub fn node(&self, id: &str) -> Option<BookmarkNode> {
        self.state.lock().snapshot(id, false)
    }

    /// Folder titles from the top-level container down to `id`'s parent.
    pub fn folder_path(&self, id: &str) -> Vec<String> {
        let state = self.state.lock();
        let mut titles = Vec::new();
        let mut current = state.nodes.get(id).and_then(|n| n.parent_id.clone());
        while let Some(parent_id) = current {
            if parent_id == state.root_id {
                break;
            }
            match state.nodes.get(&parent_id) {
                Some(parent) => {
                    titles.push(parent.title.clone());
                    current = parent.parent_id.clone();
                }
                None => break,
            }
        }
        titles.reverse();
        titles
    }

    pub fn fail_tree(&self, fail: bool) {
        self.state.lock().fail_tree = fail;
    }

    pub fn fail_children(&self, fail: bool) {
        self.state.lock().fail_children = fail;
    }

    /// Make the next `count` move calls fail.
    pub fn fail_next_moves(&self, count: u32) {
        self.state.lock().pending_move_failures = count;
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().create_calls
    }

    pub fn move_calls(&self) -> usize {
        self.state.lock().move_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().update_calls
    }
}

impl Default for MemoryBookmarkStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookmarkStore for MemoryBookmarkStore {
    async fn get(&self, id: &str) -> Result<Option<BookmarkNode>, StoreError> {
        Ok(self.state.lock().snapshot(id, false))
    }

    async fn get_tree(&self) -> Result<Vec<BookmarkNode>, StoreError> {
        let state = self.state.lock();
        if state.fail_tree {
            return Err(StoreError::Unavailable("bookmark tree".to_string()));
        }
        let root = state
            .snapshot(&state.root_id, true)
            .ok_or_else(|| StoreError::NotFound(state.root_id.clone()))?;
        Ok(vec![root])
    }

    async fn get_children(&self, id: &str) -> Result<Vec<BookmarkNode>, StoreError> {
        let state = self.state.lock();
        if state.fail_children {
            return Err(StoreError::Unavailable(format!("children of {id}")));
        }
        let node = state
            .nodes
            .get(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        Ok(node
            .children
            .iter()
            .filter_map(|child| state.snapshot(child, false))
            .collect())
    }

    async fn create_folder(&self, parent_id: &str, title: &str) -> Result<BookmarkNode, StoreError> {
        let mut state = self.state.lock();
        state.create_calls += 1;
        let id = state.insert(parent_id, title, None)?;
        debug!(folder_id = %id, parent_id, title, "Created folder");
        state
            .snapshot(&id, false)
            .ok_or(StoreError::NotFound(id))
    }

    async fn move_node(&self, id: &str, parent_id: &str) -> Result<BookmarkNode, StoreError> {
        let mut state = self.state.lock();
        state.move_calls += 1;

        if state.pending_move_failures > 0 {
            state.pending_move_failures -= 1;
            return Err(StoreError::Unavailable(format!("move of {id} raced creation")));
        }
        if !state.nodes.contains_key(id) {
            return Err(StoreError::NotFound(id.to_string()));
        }
        match state.nodes.get(parent_id) {
            Some(parent) if parent.url.is_none() => {}
            Some(_) => {
                return Err(StoreError::Rejected(format!(
                    "parent {parent_id} is not a folder"
                )));
            }
            None => return Err(StoreError::NotFound(parent_id.to_string())),
        }

        state.detach(id);
        if let Some(node) = state.nodes.get_mut(id) {
            node.parent_id = Some(parent_id.to_string());
        }
        if let Some(parent) = state.nodes.get_mut(parent_id) {
            parent.children.push(id.to_string());
        }
        state
            .snapshot(id, false)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn update_title(&self, id: &str, title: &str) -> Result<BookmarkNode, StoreError> {
        let mut state = self.state.lock();
        state.update_calls += 1;
        let node = state
            .nodes
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        node.title = title.to_string();
        state
            .snapshot(id, false)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

/// In-memory settings store.
pub struct MemorySettingsStore {
    settings: RwLock<Settings>,
}

impl MemorySettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn load(&self) -> Result<Settings, StoreError> {
        Ok(self.settings.read().clone())
    }

    async fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        *self.settings.write() = settings.clone();
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
