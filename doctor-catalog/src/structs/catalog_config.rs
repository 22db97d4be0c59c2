//! Configuration layer: reads catalog settings from environment variables
//! and exposes strongly typed configs for generation and simulated latency.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::catalog_error::CatalogError;

/// Default number of generated doctor records.
pub const DEFAULT_CATALOG_SIZE: usize = 450;

/// Artificial delays applied before each catalog call returns.
///
/// All zero by default; only useful to mimic a remote data source while
/// developing clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    pub search_ms: u64,
    pub lookup_ms: u64,
    pub facets_ms: u64,
}

impl LatencyConfig {
    pub fn search(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn lookup(&self) -> Duration {
        Duration::from_millis(self.lookup_ms)
    }

    pub fn facets(&self) -> Duration {
        Duration::from_millis(self.facets_ms)
    }
}

/// Top-level runtime configuration for the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of records generated at startup.
    pub size: usize,
    /// Seed for reproducible generation; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Simulated latency per operation.
    pub latency: LatencyConfig,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_CATALOG_SIZE,
            seed: None,
            latency: LatencyConfig::default(),
        }
    }
}

impl CatalogConfig {
    /// Build configuration from environment variables.
    ///
    /// Environment variables used:
    /// - `CATALOG_SIZE` (default: 450)
    /// - `CATALOG_SEED` (optional)
    /// - `CATALOG_SEARCH_LATENCY_MS` (default: 0)
    /// - `CATALOG_LOOKUP_LATENCY_MS` (default: 0)
    /// - `CATALOG_FACETS_LATENCY_MS` (default: 0)
    pub fn from_env() -> Result<Self, CatalogError> {
        let cfg = Self {
            size: read_env::<usize>("CATALOG_SIZE")?.unwrap_or(DEFAULT_CATALOG_SIZE),
            seed: read_env::<u64>("CATALOG_SEED")?,
            latency: LatencyConfig {
                search_ms: read_env::<u64>("CATALOG_SEARCH_LATENCY_MS")?.unwrap_or(0),
                lookup_ms: read_env::<u64>("CATALOG_LOOKUP_LATENCY_MS")?.unwrap_or(0),
                facets_ms: read_env::<u64>("CATALOG_FACETS_LATENCY_MS")?.unwrap_or(0),
            },
        };

        cfg.validate()?;
        Ok(cfg)
    }

    /// Basic validations shared by env and programmatic construction.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.size == 0 {
            return Err(CatalogError::InvalidConfig(
                "CATALOG_SIZE must be > 0".into(),
            ));
        }
        Ok(())
    }
}

/// Read an optional value from env. Absent → `Ok(None)`, unparsable → `EnvParse`.
fn read_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, CatalogError> {
    match std::env::var(key) {
        Ok(v) => v
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| CatalogError::EnvParse {
                key: key.into(),
                value: v,
            }),
        Err(_) => Ok(None),
    }
}
