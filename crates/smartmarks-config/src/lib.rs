//! # Smartmarks Config
//!
//! Runtime configuration and settings persistence for Smartmarks.

mod error;
mod loader;
mod schema;
mod settings_file;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use settings_file::FileSettingsStore;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
