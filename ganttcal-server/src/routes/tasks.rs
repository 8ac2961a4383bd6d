//! Session endpoints: load a calendar, read and edit the task list,
//! export it back to ICS.
//!
//! These routes are the presentation layer's only edges into the core:
//! `PATCH /tasks/{id}/dates` is where the Gantt widget's drag callback
//! lands, and `GET /export` is the download button.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ganttcal_core::constants::{
    DEFAULT_OFFSET_END_DAYS, DEFAULT_OFFSET_START_DAYS, EXPORT_FILE_NAME, EXPORT_MIME_TYPE,
    MAX_OFFSET_DAYS,
};
use ganttcal_core::loader::{DayOffsets, load_calendar};
use ganttcal_core::session::TaskPatch;
use ganttcal_core::task::TimelineTask;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/load", post(load))
        .route("/tasks", get(list_tasks))
        .route("/tasks/{id}", patch(update_fields).delete(remove_task))
        .route("/tasks/{id}/dates", patch(update_dates))
        .route("/export", get(export))
}

/// Request body for loading a calendar
#[derive(Deserialize)]
pub struct LoadRequest {
    pub url: String,
    #[serde(default = "default_offset_start")]
    pub offset_start: i64,
    #[serde(default = "default_offset_end")]
    pub offset_end: i64,
}

fn default_offset_start() -> i64 {
    DEFAULT_OFFSET_START_DAYS
}

fn default_offset_end() -> i64 {
    DEFAULT_OFFSET_END_DAYS
}

/// Request body for the widget's date-change callback
#[derive(Deserialize)]
pub struct DatesRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Serialize)]
pub struct RemoveResponse {
    pub removed: bool,
}

/// POST /load - Fetch a calendar URL and replace the session task list
async fn load(
    State(state): State<AppState>,
    Json(req): Json<LoadRequest>,
) -> Result<Json<Vec<TimelineTask>>, AppError> {
    for days in [req.offset_start, req.offset_end] {
        if !(0..=MAX_OFFSET_DAYS).contains(&days) {
            return Err(
                anyhow::anyhow!("offset must be between 0 and {} days", MAX_OFFSET_DAYS).into(),
            );
        }
    }

    let offsets = DayOffsets {
        start: req.offset_start,
        end: req.offset_end,
    };

    // Fetch outside the lock; the list is only replaced once complete
    let events = load_calendar(&state.http, &req.url, offsets).await?;

    let mut session = state.session.lock().await;
    session.load_events(&events);
    tracing::info!(url = %req.url, tasks = session.len(), "calendar loaded");

    Ok(Json(session.tasks().to_vec()))
}

/// GET /tasks - The current task list
async fn list_tasks(State(state): State<AppState>) -> Json<Vec<TimelineTask>> {
    let session = state.session.lock().await;
    Json(session.tasks().to_vec())
}

/// PATCH /tasks/:id/dates - Overwrite a task's date range (drag callback)
///
/// Responds with the updated task, or `null` when the id is stale.
async fn update_dates(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<DatesRequest>,
) -> Json<Option<TimelineTask>> {
    let mut session = state.session.lock().await;
    let updated = session.update_dates(&id, req.start, req.end).cloned();
    if updated.is_none() {
        tracing::debug!(%id, "date update for unknown task id");
    }
    Json(updated)
}

/// PATCH /tasks/:id - Partial field edit
async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<TaskPatch>,
) -> Json<Option<TimelineTask>> {
    let mut session = state.session.lock().await;
    Json(session.update_fields(&id, patch).cloned())
}

/// DELETE /tasks/:id - Remove a task
async fn remove_task(State(state): State<AppState>, Path(id): Path<String>) -> Json<RemoveResponse> {
    let mut session = state.session.lock().await;
    Json(RemoveResponse {
        removed: session.remove(&id),
    })
}

/// GET /export - The task list as a downloadable .ics document
async fn export(State(state): State<AppState>) -> Result<Response, AppError> {
    let session = state.session.lock().await;
    let ics = session.export(&state.origin_host)?;

    let headers = [
        (header::CONTENT_TYPE, EXPORT_MIME_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
        ),
    ];

    Ok((headers, ics).into_response())
}
