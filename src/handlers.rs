use crate::errors::AppError;
use crate::input::{clamp_int, coerce_int};
use crate::models::{
    DeltaRequest, MAX_HOURS, MIN_HOURS, ScoreRequest, SettingsRequest, Snapshot, TimerView,
};
use crate::now_ms;
use crate::state::AppState;
use crate::ui::render_index;
use crate::view::{build_snapshot_at, build_timer_view};
use axum::{extract::State, response::Html, Json};

/// Largest amount a single quick entry may add or subtract.
pub const MAX_STEP: i64 = 1000;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let record = state.store.load().await;
    Html(render_index(&build_snapshot_at(&record, now_ms())))
}

pub async fn get_state(State(state): State<AppState>) -> Json<Snapshot> {
    let record = state.store.load().await;
    Json(build_snapshot_at(&record, now_ms()))
}

pub async fn get_timer(State(state): State<AppState>) -> Json<TimerView> {
    let record = state.store.load().await;
    Json(build_timer_view(&record.timer, now_ms()))
}

pub async fn apply_settings(
    State(state): State<AppState>,
    Json(payload): Json<SettingsRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let target = payload.target.as_ref().map(|value| clamp_int(value, 1, i64::MAX));
    let hours = payload
        .hours
        .as_ref()
        .map(|value| clamp_int(value, MIN_HOURS, MAX_HOURS));
    let record = state.store.apply_settings(target, hours).await?;
    Ok(Json(build_snapshot_at(&record, now_ms())))
}

pub async fn add_delta(
    State(state): State<AppState>,
    Json(payload): Json<DeltaRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let now = now_ms();
    let record = state.store.add_delta(coerce_int(&payload.delta), now).await?;
    Ok(Json(build_snapshot_at(&record, now)))
}

pub async fn score(
    State(state): State<AppState>,
    Json(payload): Json<ScoreRequest>,
) -> Result<Json<Snapshot>, AppError> {
    let amount = clamp_int(&payload.amount, 0, MAX_STEP);
    let delta = match payload.action.trim() {
        "add" => amount,
        "sub" => -amount,
        _ => return Err(AppError::bad_request("action must be 'add' or 'sub'")),
    };

    let now = now_ms();
    let record = state.store.add_delta(delta, now).await?;
    Ok(Json(build_snapshot_at(&record, now)))
}

pub async fn undo(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let record = state.store.undo().await?;
    Ok(Json(build_snapshot_at(&record, now_ms())))
}

pub async fn reset_score(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let record = state.store.reset_score().await?;
    Ok(Json(build_snapshot_at(&record, now_ms())))
}

pub async fn wipe_all(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let record = state.store.wipe_all().await?;
    Ok(Json(build_snapshot_at(&record, now_ms())))
}

pub async fn start_timer(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let now = now_ms();
    let record = state.store.start_timer(now).await?;
    Ok(Json(build_snapshot_at(&record, now)))
}

pub async fn stop_timer(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let now = now_ms();
    let record = state.store.stop_timer(now).await?;
    Ok(Json(build_snapshot_at(&record, now)))
}

pub async fn reset_timer(State(state): State<AppState>) -> Result<Json<Snapshot>, AppError> {
    let record = state.store.reset_timer().await?;
    Ok(Json(build_snapshot_at(&record, now_ms())))
}
