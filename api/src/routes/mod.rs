pub mod deleted_response;
pub mod doctors;
pub mod patients;
pub mod tasks;
pub mod users;
