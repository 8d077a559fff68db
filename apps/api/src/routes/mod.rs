pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    // ServeDir refuses `..` segments, so lookups stay inside pages_dir.
    let pages = ServeDir::new(&state.config.pages_dir);

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route(
            "/api/generate-resume",
            post(handlers::handle_generate_resume),
        )
        .route(
            "/api/generate-content",
            post(handlers::handle_generate_content),
        )
        .nest_service("/pages", pages)
        .with_state(state)
}
