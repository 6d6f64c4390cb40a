pub mod api_routes;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::service::chat_service::ChatService;
use api_routes::{chat_handler, home_handler, reset_handler};

/// The development backend's HTTP surface.
pub fn router(chat_service: ChatService) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/reset", post(reset_handler))
        // The browser frontend is served from another origin.
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(chat_service)
}
