use std::fmt;

#[derive(Debug)]
pub enum AuthServiceError {
    ValidationError(String),
    MissingToken,
    InvalidToken,
    ExpiredToken,
    JwtError(String),
}

impl fmt::Display for AuthServiceError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AuthServiceError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AuthServiceError::MissingToken => write!(f, "No token, authorization denied"),
            AuthServiceError::InvalidToken => write!(f, "Token is not valid"),
            AuthServiceError::ExpiredToken => write!(f, "Token has expired"),
            AuthServiceError::JwtError(msg) => write!(f, "JWT error: {}", msg),
        }
    }
}

impl std::error::Error for AuthServiceError {}
