use serde::{Deserialize, Serialize};

use crate::models::cart::Cart;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemResponse {
    pub message: String,
    pub cart: Cart,
}
