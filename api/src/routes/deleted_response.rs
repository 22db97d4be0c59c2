use serde::Serialize;

/// Body of a successful `DELETE`.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: String,
    pub deleted: bool,
}
