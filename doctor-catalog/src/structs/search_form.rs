//! Raw UI state of the doctor directory page.

use serde::{Deserialize, Serialize};

use crate::structs::doctor::Gender;
use crate::structs::filter_query::SortBy;

/// Lower bound of the price slider.
pub const PRICE_SLIDER_MIN: u32 = 0;
/// Upper bound of the price slider.
pub const PRICE_SLIDER_MAX: u32 = 500;

/// The three mutually exclusive availability radio options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AvailabilityOption {
    Today,
    Tomorrow,
    Video,
}

/// Result layout; decides the page size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

impl ViewMode {
    pub fn page_size(&self) -> usize {
        match self {
            ViewMode::List => 10,
            ViewMode::Grid => 9,
        }
    }
}

/// Sidebar filter panel state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DoctorFiltersState {
    /// Secondary search box inside the filter panel.
    pub search_in_filters: String,
    pub availability_option: Option<AvailabilityOption>,
    /// Multi-select; only the first value is forwarded.
    pub specialties: Vec<String>,
    pub gender: Option<Gender>,
    /// Legacy checkbox, OR-ed with the radio option.
    pub available_today: bool,
    /// Legacy checkbox, OR-ed with the radio option.
    pub available_tomorrow: bool,
    /// Inclusive `[min, max]`.
    pub price_range: [u32; 2],
    pub experience_2_plus: bool,
    pub experience_5_plus: bool,
    /// Multi-select; only the first value is forwarded.
    pub clinics: Vec<String>,
    /// Multi-select; only the first value is forwarded.
    pub languages: Vec<String>,
    pub rating: Option<f64>,
}

impl Default for DoctorFiltersState {
    fn default() -> Self {
        Self {
            search_in_filters: String::new(),
            availability_option: Some(AvailabilityOption::Today),
            specialties: Vec::new(),
            gender: None,
            available_today: true,
            available_tomorrow: false,
            price_range: [PRICE_SLIDER_MIN, PRICE_SLIDER_MAX],
            experience_2_plus: false,
            experience_5_plus: false,
            clinics: Vec::new(),
            languages: Vec::new(),
            rating: None,
        }
    }
}

/// Everything the directory page knows when it triggers a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchForm {
    /// Main search bar.
    pub search: String,
    pub location: String,
    pub filters: DoctorFiltersState,
    pub sort_by: SortBy,
    /// 1-based.
    pub page: usize,
    pub view_mode: ViewMode,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            search: String::new(),
            location: String::new(),
            filters: DoctorFiltersState::default(),
            sort_by: SortBy::Rating,
            page: 1,
            view_mode: ViewMode::List,
        }
    }
}
