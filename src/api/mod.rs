//! API layer - HTTP handlers and middleware
//!
//! - Request handlers (welcome/debug panel, health)
//! - Middleware (security headers, session start)
//! - Route definitions

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;

pub use routes::{apply_request_limits, create_router};
pub use state::AppState;
