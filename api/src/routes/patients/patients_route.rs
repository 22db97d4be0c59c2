use std::sync::Arc;

use axum::{
    extract::{Path, Query, State, rejection::QueryRejection},
    http::StatusCode,
    response::Response,
};
use tracing::debug;

use crate::{
    core::{app_state::AppState, http::envelope::Envelope},
    error_handler::{AppError, AppResult},
    routes::patients::patient_search_request::PatientSearchRequest,
};

/// `GET /patients?q=wilson`
pub async fn search_patients_route(
    State(state): State<Arc<AppState>>,
    params: Result<Query<PatientSearchRequest>, QueryRejection>,
) -> AppResult<Response> {
    let Query(params) = params?;
    let rows = state.patients.search(&params.q);
    debug!(hits = rows.len(), "search_patients: done");
    Ok(Envelope::ok(rows).respond(StatusCode::OK))
}

/// `GET /patients/{id}`
pub async fn patient_detail_route(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let detail = state
        .patients
        .detail(&id)
        .ok_or_else(|| AppError::not_found("patient", &id))?;
    Ok(Envelope::ok(detail).respond(StatusCode::OK))
}

/// `GET /appointments/upcoming`
pub async fn upcoming_appointments_route(State(state): State<Arc<AppState>>) -> Response {
    Envelope::ok(state.patients.upcoming_appointments())
        .respond(StatusCode::OK)
}

/// `GET /appointments/requests`
pub async fn pending_requests_route(State(state): State<Arc<AppState>>) -> Response {
    Envelope::ok(state.patients.pending_requests())
        .respond(StatusCode::OK)
}
