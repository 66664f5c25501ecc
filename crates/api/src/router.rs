//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests use the exact same middleware stack.

use std::time::Duration;

use axum::http::StatusCode;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::handlers::fallback;
use crate::middleware::method_override::method_override;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Method override (must run before routing so overridden verbs match)
/// 2. Structured request/response tracing
/// 3. Request timeout
/// 4. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let routed = Router::new()
        .merge(routes::app_routes())
        // Unknown paths and unsupported methods both get the fixed 404 body.
        .fallback(fallback::not_found)
        .method_not_allowed_fallback(fallback::not_found)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Shared state.
        .with_state(state);

    // Method override must rewrite the verb before the routed app resolves a
    // route, and `Router::layer` middleware only runs after routing. Nest the
    // routed app behind an outer router whose catch-all fallback is
    // method-agnostic, so the override layer runs before the inner routing.
    Router::new()
        .fallback_service(routed)
        .layer(axum::middleware::from_fn(method_override))
}
