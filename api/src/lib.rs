mod core;
mod error_handler;
mod middleware_layer;
mod routes;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tokio::signal;
use tracing::{info, warn};

pub use crate::core::app_state::{AppConfig, AppState, ConfigError};
pub use crate::error_handler::{AppError, AppResult};

use crate::{
    middleware_layer::json_extractor::json_error_mapper,
    routes::{
        doctors::{
            doctor_profile_route::doctor_profile_route,
            facets_route::facets_route,
            search_doctors_route::{list_doctors_route, search_doctors_route},
            search_form_route::search_form_route,
        },
        patients::patients_route::{
            patient_detail_route, pending_requests_route, search_patients_route,
            upcoming_appointments_route,
        },
        tasks::tasks_route::{
            create_task_route, delete_task_route, get_task_route, list_tasks_route,
            update_task_route,
        },
        users::users_route::{
            create_user_route, delete_user_route, get_user_route, list_users_route,
            update_user_route,
        },
    },
};

/// Reads the environment, builds the catalog and serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    let state = Arc::new(AppState::from_config(&config)?);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.address)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %config.address, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    info!("server stopped");
    Ok(())
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/doctors", get(list_doctors_route))
        .route("/doctors/search", post(search_doctors_route))
        .route("/doctors/search/form", post(search_form_route))
        .route("/doctors/facets", get(facets_route))
        .route("/doctors/{id}", get(doctor_profile_route))
        .route("/tasks", get(list_tasks_route).post(create_task_route))
        .route(
            "/tasks/{id}",
            get(get_task_route)
                .patch(update_task_route)
                .delete(delete_task_route),
        )
        .route("/users", get(list_users_route).post(create_user_route))
        .route(
            "/users/{id}",
            get(get_user_route)
                .patch(update_user_route)
                .delete(delete_user_route),
        )
        .route("/patients", get(search_patients_route))
        .route("/patients/{id}", get(patient_detail_route))
        .route("/appointments/upcoming", get(upcoming_appointments_route))
        .route("/appointments/requests", get(pending_requests_route))
        .layer(middleware::from_fn(json_error_mapper))
        .with_state(state)
}

/// Resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
