pub mod auth_service_errors;
pub mod cart_service_errors;
