use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/state", get(handlers::get_state))
        .route("/api/timer", get(handlers::get_timer))
        .route("/api/settings", post(handlers::apply_settings))
        .route("/api/delta", post(handlers::add_delta))
        .route("/api/score", post(handlers::score))
        .route("/api/undo", post(handlers::undo))
        .route("/api/reset-score", post(handlers::reset_score))
        .route("/api/wipe", post(handlers::wipe_all))
        .route("/api/timer/start", post(handlers::start_timer))
        .route("/api/timer/stop", post(handlers::stop_timer))
        .route("/api/timer/reset", post(handlers::reset_timer))
        .with_state(state)
}
