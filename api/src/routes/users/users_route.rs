use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use clinic_store::{CreateUserInput, UpdateUserInput};
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, http::envelope::Envelope},
    error_handler::{AppError, AppResult},
    routes::deleted_response::DeletedResponse,
};

/// `GET /users`
pub async fn list_users_route(State(state): State<Arc<AppState>>) -> Response {
    let users = state.users.list().await;
    Envelope::ok(users).respond(StatusCode::OK)
}

/// `GET /users/{id}`
pub async fn get_user_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let user = state
        .users
        .get(&id)
        .await
        .ok_or_else(|| AppError::not_found("user", &id))?;
    Ok(Envelope::ok(user).respond(StatusCode::OK))
}

/// `POST /users`
#[instrument(name = "create_user_route", skip_all)]
pub async fn create_user_route(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateUserInput>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    let user = state.users.create(input).await?;

    info!(id = %user.id, "create_user: stored");
    Ok(Envelope::ok(user).respond(StatusCode::CREATED))
}

/// `PATCH /users/{id}`
#[instrument(name = "update_user_route", skip(state, payload))]
pub async fn update_user_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserInput>, JsonRejection>,
) -> AppResult<Response> {
    let Json(input) = payload?;
    let user = state
        .users
        .update(&id, input)
        .await?
        .ok_or_else(|| AppError::not_found("user", &id))?;
    Ok(Envelope::ok(user).respond(StatusCode::OK))
}

/// `DELETE /users/{id}`
#[instrument(name = "delete_user_route", skip(state))]
pub async fn delete_user_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    if !state.users.delete(&id).await {
        return Err(AppError::not_found("user", &id));
    }
    Ok(Envelope::ok(DeletedResponse { id, deleted: true })
        .respond(StatusCode::OK))
}
