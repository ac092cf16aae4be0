use std::sync::Arc;

use tracing::warn;

use crate::models::cart::{Cart, LineItem};
use crate::repositories::cart_repository::CartRepository;
use crate::repositories::errors::cart_repository_errors::CartRepositoryError;
use crate::services::errors::cart_service_errors::CartServiceError;

/// How many times a conflicted read-merge-write cycle is retried before the
/// request fails.
const MAX_SAVE_ATTEMPTS: u32 = 3;

pub struct CartService {
    repository: Arc<dyn CartRepository + Send + Sync>,
}

impl CartService {
    pub fn new(repository: Arc<dyn CartRepository + Send + Sync>) -> Self {
        CartService { repository }
    }

    /// Merge an item into the user's cart: an existing line item for the
    /// same product accumulates quantity (name and price keep their stored
    /// values), anything else is appended in insertion order.
    pub async fn add_item(
        &self,
        user_id: &str,
        product_id: &str,
        name: &str,
        price: f64,
        quantity: i64,
    ) -> Result<Cart, CartServiceError> {
        if user_id.is_empty() {
            return Err(CartServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        if product_id.is_empty() || name.is_empty() {
            return Err(CartServiceError::ValidationError(
                "Product ID and name cannot be empty".to_string(),
            ));
        }
        if quantity < 1 {
            return Err(CartServiceError::ValidationError(
                "Quantity must be a positive integer".to_string(),
            ));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(CartServiceError::ValidationError(
                "Price cannot be negative".to_string(),
            ));
        }

        for attempt in 1..=MAX_SAVE_ATTEMPTS {
            let mut cart = match self.repository.get_cart(user_id).await {
                Ok(cart) => cart,
                Err(CartRepositoryError::NotFound) => Cart::new(user_id.to_string()),
                Err(e) => return Err(CartServiceError::RepositoryError(e.to_string())),
            };

            match cart
                .products
                .iter_mut()
                .find(|p| p.product_id == product_id)
            {
                Some(existing) => existing.quantity += quantity,
                None => cart.products.push(LineItem {
                    product_id: product_id.to_string(),
                    name: name.to_string(),
                    price,
                    quantity,
                }),
            }

            cart.version += 1;
            match self.repository.save_cart(&cart).await {
                Ok(()) => return Ok(cart),
                Err(CartRepositoryError::VersionConflict) => {
                    warn!(
                        "Concurrent write to cart for user {} (attempt {}/{})",
                        user_id, attempt, MAX_SAVE_ATTEMPTS
                    );
                }
                Err(e) => return Err(CartServiceError::RepositoryError(e.to_string())),
            }
        }

        Err(CartServiceError::RepositoryError(format!(
            "Cart update for user {} kept conflicting with concurrent writes",
            user_id
        )))
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<Cart, CartServiceError> {
        if user_id.is_empty() {
            return Err(CartServiceError::ValidationError(
                "User ID cannot be empty".to_string(),
            ));
        }
        self.repository
            .get_cart(user_id)
            .await
            .map_err(|e| match e {
                CartRepositoryError::NotFound => CartServiceError::CartNotFound,
                _ => CartServiceError::RepositoryError(e.to_string()),
            })
    }
}
