use doctor_catalog::{DoctorRecord, PageSummary};
use serde::Serialize;

/// One page of the directory plus the figures shown under it.
#[derive(Debug, Serialize)]
pub struct SearchFormResponse {
    pub doctors: Vec<DoctorRecord>,
    pub total: usize,
    pub pagination: PageSummary,
}
