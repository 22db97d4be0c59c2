//! In-memory stores backing the admin and doctor dashboards: tasks, users
//! and the patient directory.

pub mod errors;
pub mod patients;
pub mod structs;
pub mod task_store;
pub mod user_store;
pub mod validation;

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};

pub use errors::store_error::{Result, StoreError};
pub use patients::PatientDirectory;
pub use structs::patient::{
    ActivityEntry, ChronicCondition, ConditionSeverity, PatientDetail, PatientRow, PatientStatus,
    PendingRequest, Prescription, UpcomingAppointment,
};
pub use structs::task::{CreateTaskInput, Task, TaskPriority, TaskStatus, UpdateTaskInput};
pub use structs::user::{CreateUserInput, UpdateUserInput, User, UserRole};
pub use task_store::TaskStore;
pub use user_store::UserStore;

pub(crate) async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

pub(crate) fn seeded_at(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .unwrap_or_default()
}
