pub mod api_error;
pub mod app_config;
pub mod enquiry;
pub mod ttl_cache;
