//! Core data types.

mod bookmark;
mod category;
mod event;
mod settings;

pub use bookmark::*;
pub use category::*;
pub use event::*;
pub use settings::*;
