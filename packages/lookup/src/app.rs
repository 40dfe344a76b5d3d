//! Router assembly.

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// API routes answer CORS preflights for any origin.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Build the full application: API, health check and static form.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    let api_routes = Router::new()
        .route(
            "/api/lookup",
            post(handlers::lookup_by_identifier).fallback(handlers::method_not_allowed),
        )
        .route(
            "/api/lookup-by-name",
            post(handlers::lookup_by_name).fallback(handlers::method_not_allowed),
        )
        .layer(cors_layer());

    Router::new()
        .route("/health", get(handlers::health))
        .merge(api_routes)
        .with_state(state)
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
}
