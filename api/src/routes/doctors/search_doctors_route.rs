use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{HeaderMap, StatusCode},
    response::Response,
};
use doctor_catalog::FilterQuery;
use tracing::{debug, instrument};

use crate::{
    core::{
        app_state::AppState,
        http::{envelope::Envelope, request_id::request_id},
    },
    error_handler::AppResult,
};

/// `GET /doctors?specialty=Cardiology&sortBy=price_asc&limit=9`
#[instrument(name = "list_doctors_route", skip_all)]
pub async fn list_doctors_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> AppResult<Response> {
    let Query(query) = query?;
    Ok(run(&state, &headers, query).await)
}

/// `POST /doctors/search` with a JSON `FilterQuery`.
#[instrument(name = "search_doctors_route", skip_all)]
pub async fn search_doctors_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<FilterQuery>, JsonRejection>,
) -> AppResult<Response> {
    let Json(query) = payload?;
    Ok(run(&state, &headers, query).await)
}

async fn run(state: &AppState, headers: &HeaderMap, query: FilterQuery) -> Response {
    let page = state.catalog.search(&query).await;

    debug!(
        request_id = %request_id(headers),
        total = page.total,
        returned = page.doctors.len(),
        "search_doctors: done"
    );

    Envelope::ok(page).respond(StatusCode::OK)
}
