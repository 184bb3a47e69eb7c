//! Application route configuration.

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::handlers::{health, root};
use super::middleware::{secure_headers_middleware, session_middleware};
use super::AppState;
use crate::config::Settings;

/// Create the application router with all routes configured.
pub fn create_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    apply_request_limits(routes, &state.settings)
        .layer(middleware::from_fn(session_middleware))
        // Outermost so that timeouts and errors carry the headers too
        .layer(middleware::from_fn_with_state(
            state.clone(),
            secure_headers_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Wrap `routes` in the per-request limits from `settings`.
///
/// The body limit is the maximum upload size. A request timeout is only
/// added when a maximum execution time is configured.
pub fn apply_request_limits(
    routes: Router<AppState>,
    settings: &Settings,
) -> Router<AppState> {
    let routes = routes.layer(DefaultBodyLimit::max(settings.body_limit()));

    match settings.max_execution_time {
        Some(limit) => routes.layer(TimeoutLayer::new(limit)),
        None => routes,
    }
}
