use serde::{Deserialize, Serialize};

pub mod requests;
pub mod responses;

/// One product entry within a cart. Uniqueness within a cart is by
/// `product_id`; quantity accumulates across adds.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub product_id: String,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

/// Per-user cart document. `version` counts successful saves and backs the
/// conditional write in the repository; a cart that has never been
/// persisted carries version 0.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub user_id: String,
    pub products: Vec<LineItem>,
    #[serde(default)]
    pub version: u64,
}

impl Cart {
    pub fn new(user_id: String) -> Self {
        Cart {
            user_id,
            products: Vec::new(),
            version: 0,
        }
    }
}
