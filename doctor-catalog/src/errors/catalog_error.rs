//! Unified error type for the doctor-catalog crate.

use thiserror::Error;

/// Errors produced while configuring or building the catalog.
///
/// Query evaluation never fails: every predicate is total over well-typed
/// records, and unsatisfiable queries simply produce an empty page.
#[derive(Debug, Error)]
pub enum CatalogError {
    // ── Configuration / environment ──────────────────────────────────────────
    /// Failed to parse an environment variable into the expected type.
    #[error("failed to parse env variable: {key} = '{value}'")]
    EnvParse { key: String, value: String },

    /// Configuration combination is invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
