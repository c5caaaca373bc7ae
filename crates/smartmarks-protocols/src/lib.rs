//! # Smartmarks Protocols
//!
//! Shared data model and the contracts the filing pipeline depends on:
//!
//! - Bookmark tree nodes, lifecycle events and category paths
//! - User settings as stored by the browser extension
//! - The [`BookmarkStore`], [`SettingsStore`] and [`Classifier`] seams
//! - In-memory store implementations used by tests and embedders

pub mod classifier;
pub mod error;
pub mod store;
pub mod types;

pub use classifier::Classifier;
pub use error::{ProviderError, StoreError};
pub use store::{BookmarkStore, MemoryBookmarkStore, MemorySettingsStore, SettingsStore};
pub use types::*;
