use doctor_catalog::DoctorRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfileResponse {
    /// Record with profile fields filled in.
    pub doctor: DoctorRecord,
    pub image_url: String,
}
