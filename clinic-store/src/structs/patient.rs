use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PatientStatus {
    #[serde(rename = "CONFIRMED")]
    Confirmed,
    #[serde(rename = "PENDING")]
    Pending,
    #[serde(rename = "FOLLOW UP")]
    FollowUp,
}

/// Row of the doctor's patient directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientRow {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Chart number, e.g. "#MD-92831".
    pub patient_id: String,
    pub age: u32,
    pub gender: String,
    pub last_visit: String,
    pub status: PatientStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionSeverity {
    Red,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChronicCondition {
    pub name: String,
    pub variant: ConditionSeverity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prescription {
    pub name: String,
    pub instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub title: String,
    pub date: String,
    pub by: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Directory row plus the clinical side panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetail {
    #[serde(flatten)]
    pub row: PatientRow,
    pub patient_since: String,
    pub blood_type: String,
    pub weight: String,
    pub height: String,
    pub chronic_conditions: Vec<ChronicCondition>,
    pub prescriptions: Vec<Prescription>,
    pub recent_activity: Vec<ActivityEntry>,
}

/// Booking request waiting for the doctor's decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingRequest {
    pub id: String,
    /// Directory row id.
    pub patient_id: String,
    pub name: String,
    pub requested: String,
    pub tag: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpcomingAppointment {
    pub id: String,
    /// Directory row id.
    pub patient_id: String,
    pub time: String,
    pub period: String,
    pub name: String,
    /// e.g. "Follow-up • Telehealth".
    #[serde(rename = "type")]
    pub kind: String,
    pub in_progress: bool,
    pub is_telehealth: bool,
}
