use serde::{Deserialize, Serialize};

/// Login payload. Fields default to empty strings so that a missing field
/// is rejected by the auth service as a validation failure (400) rather
/// than failing JSON extraction.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub password: String,
}
