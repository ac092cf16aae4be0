use serde::{Deserialize, Serialize};

/// JSON body returned with every non-2xx response.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
