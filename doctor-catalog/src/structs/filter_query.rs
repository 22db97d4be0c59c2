use serde::{Deserialize, Serialize};

use crate::structs::doctor::{ConsultationType, Gender};

/// Page size used when a query carries no `limit`.
pub const DEFAULT_LIMIT: usize = 9;

/// Total orderings supported by the search pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    PriceAsc,
    PriceDesc,
    #[default]
    Rating,
    Name,
}

/// Normalized search request.
///
/// Every field is optional; an absent (or empty-string) field is no
/// constraint. Field names on the wire match the public search contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterQuery {
    /// Case-insensitive substring over name, specialty, location and clinic.
    pub search: Option<String>,
    /// Case-insensitive substring over location.
    pub location: Option<String>,
    pub specialty: Option<String>,
    pub gender: Option<Gender>,
    pub available_today: Option<bool>,
    /// Same predicate as `available_today`; the data has a single
    /// availability flag.
    pub available_tomorrow: Option<bool>,
    pub consultation_type: Option<ConsultationType>,
    pub price_min: Option<u32>,
    pub price_max: Option<u32>,
    pub experience_min: Option<u32>,
    pub clinic: Option<String>,
    pub language: Option<String>,
    pub rating_min: Option<f64>,
    pub sort_by: Option<SortBy>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

impl FilterQuery {
    pub fn sort_key(&self) -> SortBy {
        self.sort_by.unwrap_or_default()
    }

    pub fn window(&self) -> (usize, usize) {
        (self.offset.unwrap_or(0), self.limit.unwrap_or(DEFAULT_LIMIT))
    }
}
