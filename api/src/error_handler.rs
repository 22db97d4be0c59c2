use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_store::StoreError;
use doctor_catalog::CatalogError;
use thiserror::Error;
use tracing::{error, warn};

use crate::{
    core::{
        app_state::ConfigError,
        http::envelope::{Envelope, ErrorDetail},
    },
    middleware_layer::json_extractor::rejection_details,
};

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    // --- Stores ---
    #[error(transparent)]
    Store(#[from] StoreError),

    // --- IO / server ---
    #[error("failed to bind listener")]
    Bind(#[source] std::io::Error),

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Well-formed JSON of the wrong shape.
    #[error("unprocessable body: {0}")]
    InvalidBody(String),

    #[error("{0} not found")]
    NotFound(String),
}

impl AppError {
    pub fn not_found(what: &str, id: &str) -> Self {
        AppError::NotFound(format!("{what} '{id}'"))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Store(StoreError::Validation { .. }) => {
                StatusCode::BAD_REQUEST
            }
            AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(StoreError::Pattern(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            // startup-only
            AppError::MissingEnv(_) | AppError::Config(_) | AppError::Catalog(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::Bind(_) | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            AppError::MissingEnv(_) => "MISSING_ENV",
            AppError::Config(_) | AppError::Catalog(_) => "CONFIG_ERROR",
            AppError::Store(StoreError::Validation { .. }) => "VALIDATION_ERROR",
            AppError::Store(StoreError::Pattern(_)) => "INTERNAL_ERROR",
            AppError::Bind(_) => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InvalidBody(_) => "UNPROCESSABLE_ENTITY",
            AppError::NotFound(_) => "NOT_FOUND",
        }
    }

    fn details(&self) -> Vec<ErrorDetail> {
        match self {
            AppError::Store(StoreError::Validation { field, message }) => {
                vec![ErrorDetail::field(*field, message.clone())]
            }
            AppError::BadRequest(msg) | AppError::InvalidBody(msg) => rejection_details(msg),
            _ => Vec::new(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            warn!(code = self.error_code(), error = %self, "request rejected");
        }

        Envelope::<()>::fail(self.error_code(), self.to_string(), self.details())
            .respond(status)
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        match err {
            JsonRejection::JsonDataError(e) => AppError::InvalidBody(e.body_text()),
            other => AppError::BadRequest(other.body_text()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(err: QueryRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}
