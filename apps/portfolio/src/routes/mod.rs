pub mod api;
pub mod health;
pub mod pages;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/api/v1/portfolio", get(api::handle_get_portfolio))
        .route("/api/v1/projects", get(api::handle_list_projects))
        .route("/api/v1/tags", get(api::handle_list_tags))
        .route("/api/v1/tags/:tag/projects", get(api::handle_tag_projects))
        .layer(CorsLayer::permissive());

    // Anything unrouted is looked up in the static directory (images, docs, stylesheet).
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(pages::handle_index))
        .route("/viewer", get(pages::handle_viewer))
        .route("/theme", post(pages::handle_toggle_theme))
        .route("/health", get(health::health_handler))
        .merge(api)
        .fallback_service(assets)
        .with_state(state)
}
