use std::fmt;

#[derive(Debug)]
pub enum CartServiceError {
    CartNotFound,
    ValidationError(String),
    RepositoryError(String),
}

impl fmt::Display for CartServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CartServiceError::CartNotFound => write!(f, "Cart is empty"),
            CartServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            CartServiceError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CartServiceError {}
