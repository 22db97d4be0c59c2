use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Response};

use crate::core::{app_state::AppState, http::envelope::Envelope};

/// `GET /doctors/facets`
pub async fn facets_route(State(state): State<Arc<AppState>>) -> Response {
    let counts = state.catalog.facet_counts().await;
    Envelope::ok(counts).respond(StatusCode::OK)
}
