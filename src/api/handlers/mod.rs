//! HTTP request handlers.

pub mod debug;
pub mod health;

pub use debug::{render_debug_panel, root, DebugQuery};
pub use health::health;
