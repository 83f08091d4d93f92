use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness plus a count of what the embedded data store holds.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let portfolio = state.portfolio.as_ref();
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": env!("CARGO_PKG_NAME"),
        "projects": portfolio.projects.len(),
        "awards": portfolio.awards.len()
    }))
}
