pub mod cart_repository_errors;
