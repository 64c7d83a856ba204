use crate::errors::AppError;
use crate::models::{SnapshotStatusResponse, WeekOption, WeekQuery, WeeklyResponse};
use crate::state::AppState;
use crate::stats::build_weekly;
use crate::ui::{render_error, render_index};
use crate::week::{selectable_weeks, WeekSelection};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use chrono::Local;
use std::sync::Arc;
use tracing::{error, info};

pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> (StatusCode, Html<String>) {
    let selected = query.week.as_deref().unwrap_or("current");
    let weeks = selectable_weeks(Local::now().date_naive());

    let selection = match WeekSelection::parse(query.week.as_deref()) {
        Ok(selection) => selection,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Html(render_error(&weeks, selected, &err.to_string())),
            );
        }
    };

    match state.snapshots.current().await {
        Ok(snapshot) => {
            let weekly = build_weekly(&snapshot, state.selection(), selection);
            (StatusCode::OK, Html(render_index(&weekly, &weeks, selected)))
        }
        Err(err) => {
            let message = format!("Error loading data: {err}. Is the backend server running?");
            (StatusCode::SERVICE_UNAVAILABLE, Html(render_error(&weeks, selected, &message)))
        }
    }
}

pub async fn get_weekly(
    State(state): State<AppState>,
    Query(query): Query<WeekQuery>,
) -> Result<Json<WeeklyResponse>, AppError> {
    let selection = WeekSelection::parse(query.week.as_deref())?;
    let snapshot = state.snapshots.current().await?;
    Ok(Json(build_weekly(&snapshot, state.selection(), selection)))
}

pub async fn get_weeks() -> Json<Vec<WeekOption>> {
    Json(selectable_weeks(Local::now().date_naive()))
}

pub async fn reload(State(state): State<AppState>) -> Result<Json<SnapshotStatusResponse>, AppError> {
    match state.snapshots.reload(Arc::clone(&state.feed)).await {
        Ok(snapshot) => info!(athletes = snapshot.athletes.len(), "snapshot reloaded"),
        Err(err) => {
            error!("snapshot reload failed: {err}");
            return Err(err.into());
        }
    }
    Ok(Json(state.snapshots.status().await))
}

pub async fn health(State(state): State<AppState>) -> Json<SnapshotStatusResponse> {
    Json(state.snapshots.status().await)
}
