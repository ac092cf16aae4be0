use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, error};

use crate::{error::ApiError, middleware::auth::AuthenticatedUser, state::AppState};
use shared::models::cart::requests::AddItemRequest;
use shared::models::cart::responses::AddItemResponse;
use shared::models::cart::Cart;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/cart/add", post(add_item))
        .route("/cart", get(get_cart))
}

async fn add_item(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
    Json(payload): Json<AddItemRequest>,
) -> Result<Json<AddItemResponse>, ApiError> {
    let cart = state
        .cart_service
        .add_item(
            &authenticated_user.user_id,
            &payload.product_id,
            &payload.name,
            payload.price,
            payload.quantity,
        )
        .await
        .map_err(|e| {
            error!(
                "Failed to add product {} to cart for user {}: {}",
                payload.product_id, authenticated_user.user_id, e
            );
            ApiError::from(e)
        })?;
    debug!(
        "Added product {} to cart for user {}",
        payload.product_id, authenticated_user.user_id
    );
    Ok(Json(AddItemResponse {
        message: "Product added to cart".to_string(),
        cart,
    }))
}

async fn get_cart(
    State(state): State<AppState>,
    authenticated_user: AuthenticatedUser,
) -> Result<Json<Cart>, ApiError> {
    state
        .cart_service
        .get_cart(&authenticated_user.user_id)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                "Failed to retrieve cart for user {}: {}",
                authenticated_user.user_id, e
            );
            ApiError::from(e)
        })
}
