//! Bookmark mutation orchestration.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use smartmarks_config::MutationConfig;
use smartmarks_protocols::{
    BookmarkNode, BookmarkStore, CategoryPath, Classifier, Settings, SettingsStore,
};

use crate::error::MutationError;
use crate::resolver::FolderResolver;
use crate::scheduler::BookmarkProcessor;

/// What happened to a bookmark handed to the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// No category was available; the bookmark was left untouched.
    Unclassified,

    /// The bookmark was moved into `folder_id`.
    Filed {
        folder_id: String,
        path: CategoryPath,
        /// New title when a tag was appended.
        retitled: Option<String>,
    },
}

/// Classifies a bookmark, files it and tags it.
pub struct Orchestrator {
    store: Arc<dyn BookmarkStore>,
    settings: Arc<dyn SettingsStore>,
    classifier: Arc<dyn Classifier>,
    resolver: FolderResolver,
    move_attempts: u32,
    retry_backoff: Duration,
}

impl Orchestrator {
    pub fn new(
        store: Arc<dyn BookmarkStore>,
        settings: Arc<dyn SettingsStore>,
        classifier: Arc<dyn Classifier>,
        config: &MutationConfig,
    ) -> Self {
        Self {
            resolver: FolderResolver::new(store.clone()),
            store,
            settings,
            classifier,
            move_attempts: config.move_attempts.max(1),
            retry_backoff: config.retry_backoff(),
        }
    }

    /// Run the full filing sequence for one bookmark.
    pub async fn process_bookmark(
        &self,
        id: &str,
        bookmark: &BookmarkNode,
    ) -> Result<MutationOutcome, MutationError> {
        let settings = self.load_settings().await;
        let url = bookmark.url.as_deref().unwrap_or_default();

        let Some(path) = self.classifier.classify(&bookmark.title, url, &settings).await else {
            debug!(bookmark_id = id, "No category available, leaving bookmark in place");
            return Ok(MutationOutcome::Unclassified);
        };

        let folder_id = match self.resolver.ensure_folder_hierarchy(&path).await {
            Ok(folder_id) => folder_id,
            Err(e) => {
                error!(bookmark_id = id, %path, error = %e, "Could not resolve target folder");
                return Err(e.into());
            }
        };

        self.move_with_retry(id, &folder_id).await?;
        info!(bookmark_id = id, folder_id = %folder_id, %path, "Filed bookmark");

        let retitled = if settings.should_append_tags() {
            self.append_tag(id, &path).await?
        } else {
            None
        };

        Ok(MutationOutcome::Filed {
            folder_id,
            path,
            retitled,
        })
    }

    /// Move with a fixed pause between attempts.
    ///
    /// Some browsers reject moves that race the creation of the bookmark.
    pub async fn move_with_retry(&self, id: &str, parent_id: &str) -> Result<(), MutationError> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.store.move_node(id, parent_id).await {
                Ok(_) => return Ok(()),
                Err(e) if attempt < self.move_attempts => {
                    warn!(bookmark_id = id, attempt, error = %e, "Move failed, retrying");
                    tokio::time::sleep(self.retry_backoff).await;
                }
                Err(source) => {
                    error!(bookmark_id = id, attempts = attempt, error = %source, "Move failed, giving up");
                    return Err(MutationError::Move {
                        id: id.to_string(),
                        attempts: attempt,
                        source,
                    });
                }
            }
        }
    }

    /// Append `#tag` to the current title unless it is already there.
    async fn append_tag(&self, id: &str, path: &CategoryPath) -> Result<Option<String>, MutationError> {
        let token = format!("#{}", path.tag());

        // Read the title again so edits made while classifying survive.
        let current = self
            .store
            .get(id)
            .await
            .map_err(|source| MutationError::Rename {
                id: id.to_string(),
                source,
            })?
            .ok_or_else(|| MutationError::Vanished(id.to_string()))?;

        if current.title.contains(&token) {
            debug!(bookmark_id = id, tag = %token, "Title already tagged");
            return Ok(None);
        }

        let title = format!("{} {}", current.title, token);
        self.store
            .update_title(id, &title)
            .await
            .map_err(|source| {
                error!(bookmark_id = id, error = %source, "Tagging failed");
                MutationError::Rename {
                    id: id.to_string(),
                    source,
                }
            })?;
        debug!(bookmark_id = id, title = %title, "Tagged bookmark");
        Ok(Some(title))
    }

    async fn load_settings(&self) -> Settings {
        match self.settings.load().await {
            Ok(settings) => settings,
            Err(e) => {
                warn!(error = %e, "Settings unavailable, using defaults");
                Settings::default()
            }
        }
    }
}

#[async_trait]
impl BookmarkProcessor for Orchestrator {
    async fn process(&self, id: &str, bookmark: &BookmarkNode) {
        match self.process_bookmark(id, bookmark).await {
            Ok(outcome) => debug!(bookmark_id = id, ?outcome, "Bookmark processed"),
            Err(e) => debug!(bookmark_id = id, error = %e, "Bookmark left unfiled"),
        }
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
