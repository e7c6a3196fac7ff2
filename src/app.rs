use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/entries", post(handlers::submit_entry))
        .route("/api/journal", get(handlers::get_journal))
        .route("/api/streak", get(handlers::get_streak))
        .route("/api/stats", get(handlers::get_stats))
        .route("/api/achievements", get(handlers::get_achievements))
        .with_state(state)
}
