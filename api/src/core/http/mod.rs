pub mod envelope;
pub mod request_id;
