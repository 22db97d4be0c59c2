pub mod patient;
pub mod task;
pub mod user;
