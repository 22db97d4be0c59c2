use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::Response,
};
use doctor_catalog::{DEFAULT_AVATAR_SIZE, doctor_image_url};
use tracing::{debug, instrument};

use crate::{
    core::{
        app_state::AppState,
        http::{envelope::Envelope, request_id::request_id},
    },
    error_handler::{AppError, AppResult},
    routes::doctors::doctor_profile_response::DoctorProfileResponse,
};

/// `GET /doctors/{id}`
#[instrument(name = "doctor_profile_route", skip(state, headers))]
pub async fn doctor_profile_route(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let doctor = state
        .catalog
        .get_by_id(&id)
        .await
        .ok_or_else(|| AppError::not_found("doctor", &id))?;

    debug!(request_id = %request_id(&headers), "doctor_profile: found");

    let image_url = doctor_image_url(&doctor.id, DEFAULT_AVATAR_SIZE);
    Ok(
        Envelope::ok(DoctorProfileResponse { doctor, image_url })
            .respond(StatusCode::OK),
    )
}
