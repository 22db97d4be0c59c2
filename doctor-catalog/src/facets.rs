//! Facet counts for sidebar badges, e.g. "Cardiology (11)".

use crate::structs::doctor::{DoctorRecord, Gender};
use crate::structs::result_page::FacetCounts;

/// Count records per specialty, gender and clinic.
///
/// Always called with the full catalog: counts do not narrow as filters apply.
/// Both genders are present even when one has no records.
pub fn count_facets(records: &[DoctorRecord]) -> FacetCounts {
    let mut counts = FacetCounts::default();
    for gender in [Gender::Male, Gender::Female] {
        counts.by_gender.insert(gender.to_string(), 0);
    }

    for d in records {
        *counts.by_specialty.entry(d.specialty.clone()).or_insert(0) += 1;
        *counts.by_gender.entry(d.gender.to_string()).or_insert(0) += 1;
        if !d.clinic.is_empty() {
            *counts.by_clinic.entry(d.clinic.clone()).or_insert(0) += 1;
        }
    }

    counts
}
