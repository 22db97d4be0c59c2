pub mod catalog_config;
pub mod doctor;
pub mod filter_query;
pub mod page_summary;
pub mod result_page;
pub mod search_form;
