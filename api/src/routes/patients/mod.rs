pub mod patient_search_request;
pub mod patients_route;
