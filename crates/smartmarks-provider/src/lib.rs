//! Classification gateway for Smartmarks.
//!
//! Turns a bookmark's title and URL into a [`CategoryPath`] by asking the
//! provider selected in the user's settings.
//!
//! [`CategoryPath`]: smartmarks_protocols::CategoryPath

mod api;
mod clean;
mod gateway;
mod prompt;
mod strategy;

pub use clean::clean_response;
pub use gateway::ClassificationGateway;
pub use prompt::{user_content, SYSTEM_PROMPT};
