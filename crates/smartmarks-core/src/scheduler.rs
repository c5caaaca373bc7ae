//! Debounce scheduler.
//!
//! Each bookmark id owns at most one pending timer. Creation arms it,
//! edits re-arm it, a manual move or removal disarms it for good. When a
//! timer survives its full delay the bookmark is fetched fresh from the
//! store and handed to the [`BookmarkProcessor`].
//!
//! Pending timers live only in memory; a restart drops them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use smartmarks_config::SchedulerConfig;
use smartmarks_protocols::{BookmarkEvent, BookmarkNode, BookmarkStore, ChangeInfo, MoveInfo};

/// Receives bookmarks whose debounce delay has elapsed.
#[async_trait]
pub trait BookmarkProcessor: Send + Sync {
    async fn process(&self, id: &str, bookmark: &BookmarkNode);
}

/// Handle for one armed timer.
struct PendingTimer {
    generation: u64,
    token: CancellationToken,
}

struct SchedulerInner {
    store: Arc<dyn BookmarkStore>,
    processor: Arc<dyn BookmarkProcessor>,
    delay: Duration,
    timers: Mutex<HashMap<String, PendingTimer>>,
    next_generation: AtomicU64,
}

impl SchedulerInner {
    /// Drop the entry if it still belongs to `generation`.
    fn take_if_current(&self, id: &str, generation: u64) -> bool {
        let mut timers = self.timers.lock();
        match timers.get(id) {
            Some(timer) if timer.generation == generation => {
                timers.remove(id);
                true
            }
            _ => false,
        }
    }

    async fn fire(&self, id: &str) {
        match self.store.get(id).await {
            Ok(Some(bookmark)) => {
                debug!(bookmark_id = id, "Debounce elapsed, processing bookmark");
                self.processor.process(id, &bookmark).await;
            }
            Ok(None) => debug!(bookmark_id = id, "Bookmark gone before processing"),
            Err(e) => warn!(bookmark_id = id, error = %e, "Could not fetch bookmark, abandoning"),
        }
    }
}

/// Per-bookmark timer table coalescing lifecycle events.
///
/// Handlers must be called from within a Tokio runtime.
#[derive(Clone)]
pub struct DebounceScheduler {
    inner: Arc<SchedulerInner>,
}

impl DebounceScheduler {
    pub fn new(
        store: Arc<dyn BookmarkStore>,
        processor: Arc<dyn BookmarkProcessor>,
        config: &SchedulerConfig,
    ) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                store,
                processor,
                delay: config.debounce(),
                timers: Mutex::new(HashMap::new()),
                next_generation: AtomicU64::new(0),
            }),
        }
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    /// A bookmark was created. Folders are ignored.
    pub fn on_created(&self, id: &str, bookmark: &BookmarkNode) {
        if bookmark.is_folder() {
            return;
        }
        let mut timers = self.inner.timers.lock();
        self.arm(&mut timers, id);
    }

    /// A bookmark was edited. Restarts the delay only if a timer is armed.
    pub fn on_changed(&self, id: &str, _info: &ChangeInfo) {
        let mut timers = self.inner.timers.lock();
        if timers.contains_key(id) {
            debug!(bookmark_id = id, "Bookmark edited, restarting delay");
            self.arm(&mut timers, id);
        }
    }

    /// The user moved the bookmark; their placement wins.
    pub fn on_moved(&self, id: &str, _info: &MoveInfo) {
        if self.disarm(id) {
            info!(bookmark_id = id, "Bookmark moved manually, skipping classification");
        }
    }

    /// The bookmark was deleted.
    pub fn on_removed(&self, id: &str) {
        if self.disarm(id) {
            debug!(bookmark_id = id, "Bookmark removed, timer dropped");
        }
    }

    /// Route an event to its handler.
    pub fn dispatch(&self, event: &BookmarkEvent) {
        match event {
            BookmarkEvent::Created { id, node } => self.on_created(id, node),
            BookmarkEvent::Changed { id, info } => self.on_changed(id, info),
            BookmarkEvent::Moved { id, info } => self.on_moved(id, info),
            BookmarkEvent::Removed { id } => self.on_removed(id),
        }
    }

    /// Dispatch events until the channel closes.
    pub async fn run(&self, mut events: mpsc::Receiver<BookmarkEvent>) {
        info!(delay_ms = self.inner.delay.as_millis() as u64, "Bookmark event loop started");
        while let Some(event) = events.recv().await {
            debug!(bookmark_id = event.bookmark_id(), kind = event.kind(), "Bookmark event");
            self.dispatch(&event);
        }
        info!("Bookmark event channel closed");
    }

    pub fn is_pending(&self, id: &str) -> bool {
        self.inner.timers.lock().contains_key(id)
    }

    pub fn pending_count(&self) -> usize {
        self.inner.timers.lock().len()
    }

    /// Disarm every timer.
    pub fn cancel_all(&self) {
        let mut timers = self.inner.timers.lock();
        for (_, timer) in timers.drain() {
            timer.token.cancel();
        }
    }

    /// Install a fresh timer for `id`, cancelling any previous one.
    fn arm(&self, timers: &mut HashMap<String, PendingTimer>, id: &str) {
        let generation = self.inner.next_generation.fetch_add(1, Ordering::Relaxed);
        let deadline = Instant::now() + self.inner.delay;
        let token = CancellationToken::new();

        let previous = timers.insert(
            id.to_string(),
            PendingTimer {
                generation,
                token: token.clone(),
            },
        );
        if let Some(previous) = previous {
            previous.token.cancel();
        }

        let inner = Arc::clone(&self.inner);
        let id = id.to_string();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => return,
                _ = tokio::time::sleep_until(deadline) => {}
            }
            if inner.take_if_current(&id, generation) {
                inner.fire(&id).await;
            }
        });
    }

    fn disarm(&self, id: &str) -> bool {
        match self.inner.timers.lock().remove(id) {
            Some(timer) => {
                timer.token.cancel();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
