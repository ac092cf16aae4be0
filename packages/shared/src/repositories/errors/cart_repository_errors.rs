#[derive(Debug)]
pub enum CartRepositoryError {
    NotFound,
    VersionConflict,
    Serialization(String),
    DynamoDb(String),
}

impl std::fmt::Display for CartRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartRepositoryError::NotFound => write!(f, "Cart not found"),
            CartRepositoryError::VersionConflict => {
                write!(f, "Cart was modified by a concurrent write")
            }
            CartRepositoryError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            CartRepositoryError::DynamoDb(msg) => write!(f, "DynamoDB error: {}", msg),
        }
    }
}

impl std::error::Error for CartRepositoryError {}
