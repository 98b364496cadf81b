pub mod api_errors;
pub mod errors;
