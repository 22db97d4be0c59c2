pub mod doctor_profile_response;
pub mod doctor_profile_route;
pub mod facets_route;
pub mod search_doctors_route;
pub mod search_form_response;
pub mod search_form_route;
