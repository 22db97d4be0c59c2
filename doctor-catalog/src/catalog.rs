//! Injected, read-only doctor data source.

use std::{sync::Arc, time::Duration};

use tracing::{debug, info, instrument};

use crate::errors::catalog_error::CatalogError;
use crate::facets::count_facets;
use crate::generator::generate_doctors;
use crate::search::run_search;
use crate::structs::catalog_config::{CatalogConfig, LatencyConfig};
use crate::structs::doctor::DoctorRecord;
use crate::structs::filter_query::FilterQuery;
use crate::structs::result_page::{FacetCounts, ResultPage};

/// Immutable catalog shared by all callers.
///
/// Cloning is cheap (shared records). Every method returns owned copies, so
/// callers can never mutate catalog state.
#[derive(Debug, Clone)]
pub struct DoctorCatalog {
    records: Arc<[DoctorRecord]>,
    latency: LatencyConfig,
}

impl DoctorCatalog {
    /// Wrap an arbitrary record set, e.g. a test fixture.
    pub fn new(records: Vec<DoctorRecord>) -> Self {
        Self {
            records: records.into(),
            latency: LatencyConfig::default(),
        }
    }

    pub fn with_latency(mut self, latency: LatencyConfig) -> Self {
        self.latency = latency;
        self
    }

    /// Generate the catalog described by `cfg`.
    pub fn from_config(cfg: &CatalogConfig) -> Result<Self, CatalogError> {
        cfg.validate()?;
        let catalog = Self::new(generate_doctors(cfg.size, cfg.seed)).with_latency(cfg.latency);

        info!(
            target: "doctor_catalog::catalog",
            size = catalog.len(),
            "catalog initialized"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Filter, count, sort and window the catalog.
    #[instrument(name = "catalog_search", skip_all, fields(sort = ?query.sort_key()))]
    pub async fn search(&self, query: &FilterQuery) -> ResultPage {
        simulate_latency(self.latency.search()).await;
        let page = run_search(&self.records, query);

        if page.is_no_results() {
            debug!(target: "doctor_catalog::catalog", "search: no results");
        }
        page
    }

    /// Profile view of one doctor; `None` for an unknown id.
    #[instrument(name = "catalog_get_by_id", skip(self))]
    pub async fn get_by_id(&self, id: &str) -> Option<DoctorRecord> {
        simulate_latency(self.latency.lookup()).await;
        let found = self.records.iter().find(|d| d.id == id).map(DoctorRecord::profile_view);

        if found.is_none() {
            debug!(target: "doctor_catalog::catalog", id, "get_by_id: unknown id");
        }
        found
    }

    /// Facet counts over the full catalog.
    pub async fn facet_counts(&self) -> FacetCounts {
        simulate_latency(self.latency.facets()).await;
        count_facets(&self.records)
    }
}

async fn simulate_latency(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}
