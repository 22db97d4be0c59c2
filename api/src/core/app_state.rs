use std::{env, time::Duration};

use clinic_store::{PatientDirectory, TaskStore, UserStore};
use doctor_catalog::{CatalogConfig, DoctorCatalog};
use thiserror::Error;
use tracing::info;

use crate::error_handler::AppError;

/// Configuration problems outside the catalog's own settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {key} has invalid value {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}

/// Everything read from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address, e.g. "0.0.0.0:8080".
    pub address: String,
    pub catalog: CatalogConfig,
    /// Simulated latency for task and user store calls.
    pub store_latency: Duration,
}

impl AppConfig {
    /// Reads `API_ADDRESS` (required), the `CATALOG_*` settings and
    /// `STORE_LATENCY_MS` (default 0).
    pub fn from_env() -> Result<Self, AppError> {
        let address = env::var("API_ADDRESS")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .ok_or(AppError::MissingEnv("API_ADDRESS"))?;

        let catalog = CatalogConfig::from_env()?;

        let store_latency = match env::var("STORE_LATENCY_MS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidNumber {
                    key: "STORE_LATENCY_MS",
                    value: raw.clone(),
                })?,
            Err(_) => Duration::ZERO,
        };

        Ok(Self {
            address,
            catalog,
            store_latency,
        })
    }
}

/// Shared state for all HTTP handlers.
#[derive(Debug)]
pub struct AppState {
    pub catalog: DoctorCatalog,
    pub tasks: TaskStore,
    pub users: UserStore,
    pub patients: PatientDirectory,
}

impl AppState {
    /// Seeded stores around an existing catalog.
    pub fn new(catalog: DoctorCatalog) -> Self {
        Self {
            catalog,
            tasks: TaskStore::new(),
            users: UserStore::new(),
            patients: PatientDirectory::new(),
        }
    }

    pub fn from_config(cfg: &AppConfig) -> Result<Self, AppError> {
        let catalog = DoctorCatalog::from_config(&cfg.catalog)?;
        let state = Self {
            catalog,
            tasks: TaskStore::new().with_latency(cfg.store_latency),
            users: UserStore::new().with_latency(cfg.store_latency),
            patients: PatientDirectory::new(),
        };

        info!(
            doctors = state.catalog.len(),
            store_latency_ms = cfg.store_latency.as_millis() as u64,
            "app state ready"
        );
        Ok(state)
    }
}
