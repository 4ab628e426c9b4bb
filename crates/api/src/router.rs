//! Route table and middleware stack.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer, limit::RequestBodyLimitLayer, services::ServeDir, trace::TraceLayer,
};

use crate::{config::ApiConfig, handlers, state::AppState};

/// Build the application router.
///
/// The body limit comes from `config.max_body_bytes`; axum's own default
/// limit is disabled.
pub fn create_router(state: AppState, config: &ApiConfig) -> Router {
    let mut router = Router::new()
        .route("/api/validate", post(handlers::validate))
        .route("/api/parse-tree", post(handlers::validate))
        .route("/api/railroad", post(handlers::validate))
        .route("/health", get(handlers::health));

    if let Some(dir) = &config.static_dir {
        router = router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }

    let router = router
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes));

    let router = if config.cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.layer(TraceLayer::new_for_http())
}
