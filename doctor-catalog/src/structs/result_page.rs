use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::structs::doctor::DoctorRecord;

/// One window of search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Post-sort, post-slice window (owned copies).
    pub doctors: Vec<DoctorRecord>,
    /// Matches before pagination.
    pub total: usize,
}

impl ResultPage {
    /// The "no results" response.
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when nothing matched at all (as opposed to an empty later page).
    pub fn is_no_results(&self) -> bool {
        self.total == 0
    }
}

/// Per-value record counts over the full catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacetCounts {
    pub by_specialty: BTreeMap<String, usize>,
    pub by_gender: BTreeMap<String, usize>,
    pub by_clinic: BTreeMap<String, usize>,
}
