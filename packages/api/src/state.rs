use std::sync::Arc;

use shared::services::auth_service::AuthService;
use shared::services::cart_service::CartService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub cart_service: Arc<CartService>,
}
