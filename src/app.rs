use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/weekly", get(handlers::get_weekly))
        .route("/api/weeks", get(handlers::get_weeks))
        .route("/api/reload", post(handlers::reload))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
