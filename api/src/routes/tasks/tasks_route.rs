use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use clinic_store::{CreateTaskInput, UpdateTaskInput};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::envelope::Envelope},
    error_handler::{AppError, AppResult},
    routes::deleted_response::DeletedResponse,
};

/// `GET /tasks`
pub async fn list_tasks_route(State(state): State<Arc<AppState>>) -> Response {
    let tasks = state.tasks.list().await;
    Envelope::ok(tasks).respond(StatusCode::OK)
}

/// `GET /tasks/{id}`
pub async fn get_task_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let task = state
        .tasks
        .get(&id)
        .await
        .ok_or_else(|| AppError::not_found("task", &id))?;
    Ok(Envelope::ok(task).respond(StatusCode::OK))
}

/// `POST /tasks`
#[instrument(name = "create_task_route", skip_all)]
pub async fn create_task_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateTaskInput>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    let task = state.tasks.create(input).await?;

    info!(id = %task.id, "create_task: stored");
    Ok(Envelope::ok(task).respond(StatusCode::CREATED))
}

/// `PATCH /tasks/{id}`
#[instrument(name = "update_task_route", skip(state, payload))]
pub async fn update_task_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTaskInput>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    let task = state
        .tasks
        .update(&id, input)
        .await?
        .ok_or_else(|| AppError::not_found("task", &id))?;
    Ok(Envelope::ok(task).respond(StatusCode::OK))
}

/// `DELETE /tasks/{id}`
#[instrument(name = "delete_task_route", skip(state))]
pub async fn delete_task_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if !state.tasks.delete(&id).await {
        return Err(AppError::not_found("task", &id));
    }
    Ok(Envelope::ok(DeletedResponse { id, deleted: true })
        .respond(StatusCode::OK))
}
