//! # Smartmarks Core
//!
//! The filing pipeline:
//!
//! - [`DebounceScheduler`] coalesces bookmark lifecycle events into one
//!   delayed trigger per bookmark
//! - [`Orchestrator`] classifies, resolves the folder, moves and tags
//! - [`FolderResolver`] materializes category paths in the bookmark tree

pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod scheduler;

pub use error::{MutationError, ResolveError};
pub use orchestrator::{MutationOutcome, Orchestrator};
pub use resolver::FolderResolver;
pub use scheduler::{BookmarkProcessor, DebounceScheduler};
