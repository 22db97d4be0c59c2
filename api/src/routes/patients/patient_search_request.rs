use serde::Deserialize;

/// Query string of `GET /patients`.
#[derive(Debug, Default, Deserialize)]
pub struct PatientSearchRequest {
    /// Matched against name, email and chart number. Blank lists everyone.
    #[serde(default)]
    pub q: String,
}
