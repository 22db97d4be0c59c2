//! Doctor directory core.
//!
//! Public API:
//! - [`DoctorCatalog`]: injected read-only data source with `search`,
//!   `get_by_id` and `facet_counts`.
//! - [`translate`]: directory page state → [`FilterQuery`].
//! - [`run_search`]: the filter → count → sort → window pipeline over any slice.
//! - [`SearchSequencer`]: discard responses of superseded searches.

pub mod avatar;
mod catalog;
pub mod errors;
mod facets;
pub mod generator;
mod search;
mod stale;
pub mod structs;
mod translator;

pub use avatar::{DEFAULT_AVATAR_SIZE, doctor_image_url};
pub use catalog::DoctorCatalog;
pub use errors::catalog_error::CatalogError;
pub use facets::count_facets;
pub use search::{matches, run_search};
pub use stale::{SearchSequencer, SearchTicket};
pub use structs::catalog_config::{CatalogConfig, LatencyConfig};
pub use structs::doctor::{ConsultationType, DoctorRecord, EducationEntry, Gender};
pub use structs::filter_query::{DEFAULT_LIMIT, FilterQuery, SortBy};
pub use structs::page_summary::PageSummary;
pub use structs::result_page::{FacetCounts, ResultPage};
pub use structs::search_form::{AvailabilityOption, DoctorFiltersState, SearchForm, ViewMode};
pub use translator::translate;
