//! Smartmarks - files new browser bookmarks into AI-chosen folders.
//!
//! Browser bookmark events flow into a [`DebounceScheduler`]; once a new
//! bookmark has been left alone for the debounce delay the [`Orchestrator`]
//! asks the configured provider for a category, materializes the folder
//! path and moves (and optionally tags) the bookmark.
//!
//! [`App`] wires the pieces together from a [`SmartmarksConfig`].

mod app;
mod telemetry;

pub use app::{App, AppError};
pub use telemetry::init_tracing;

pub use smartmarks_config::{
    ConfigLoader, ConfigValidator, FileSettingsStore, LoggingConfig, SmartmarksConfig,
};
pub use smartmarks_core::{
    BookmarkProcessor, DebounceScheduler, FolderResolver, MutationError, MutationOutcome,
    Orchestrator, ResolveError,
};
pub use smartmarks_protocols::{
    BookmarkEvent, BookmarkNode, BookmarkStore, CategoryPath, ChangeInfo, Classifier,
    MemoryBookmarkStore, MemorySettingsStore, MoveInfo, Provider, ProviderError, Settings,
    SettingsStore, StoreError,
};
pub use smartmarks_provider::{clean_response, ClassificationGateway};
