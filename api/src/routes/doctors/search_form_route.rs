use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use doctor_catalog::{PageSummary, SearchForm, translate};
use tracing::{debug, instrument};

use crate::{
    core::{
        app_state::AppState,
        http::{envelope::Envelope, request_id::request_id},
    },
    error_handler::AppResult,
    routes::doctors::search_form_response::SearchFormResponse,
};

/// `POST /doctors/search/form`: raw directory page state in, one page out.
#[instrument(name = "search_form_route", skip_all)]
pub async fn search_form_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    payload: Result<Json<SearchForm>, JsonRejection>,
) -> AppResult<Response> {
    let Json(form) = payload?;
    let query = translate(&form);
    let page = state.catalog.search(&query).await;
    let pagination = PageSummary::new(page.total, form.page, form.view_mode.page_size());

    debug!(
        request_id = %request_id(&headers),
        page = form.page,
        view = ?form.view_mode,
        total = page.total,
        total_pages = pagination.total_pages,
        "search_form: done"
    );

    Ok(Envelope::ok(SearchFormResponse {
        doctors: page.doctors,
        total: page.total,
        pagination,
    })
    .respond(StatusCode::OK))
}
