//! Error types shared across Smartmarks crates.

mod provider;
mod store;

pub use provider::*;
pub use store::*;
