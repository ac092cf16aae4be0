use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::{TestResponse, TestServer};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use uuid::Uuid;

use api::state::AppState;
use shared::models::auth::responses::TokenClaims;
use shared::models::cart::Cart;
use shared::repositories::cart_repository::CartRepository;
use shared::repositories::errors::cart_repository_errors::CartRepositoryError;
use shared::services::auth_service::AuthService;
use shared::services::cart_service::CartService;

pub const TEST_JWT_SECRET: &str = "trolley-integration-test-secret";

/// In-memory stand-in for the DynamoDB cart table with the same
/// conditional-write semantics as the production repository.
#[derive(Default)]
pub struct InMemoryCartRepository {
    carts: Mutex<HashMap<String, Cart>>,
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn get_cart(&self, user_id: &str) -> Result<Cart, CartRepositoryError> {
        self.carts
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or(CartRepositoryError::NotFound)
    }

    async fn save_cart(&self, cart: &Cart) -> Result<(), CartRepositoryError> {
        let mut carts = self.carts.lock().unwrap();
        match carts.get(&cart.user_id).map(|stored| stored.version) {
            None if cart.version <= 1 => {}
            Some(stored) if cart.version == stored + 1 => {}
            _ => return Err(CartRepositoryError::VersionConflict),
        }
        carts.insert(cart.user_id.clone(), cart.clone());
        Ok(())
    }
}

/// Spin up the full application in-process against an empty in-memory store.
pub fn test_server() -> TestServer {
    let repository = Arc::new(InMemoryCartRepository::default());
    let cart_service = Arc::new(CartService::new(repository));
    let auth_service = Arc::new(AuthService::new(TEST_JWT_SECRET.to_string()));

    let app = api::create_app(AppState {
        auth_service,
        cart_service,
    });
    TestServer::new(app).expect("Failed to build test server")
}

pub fn random_user_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub async fn login(server: &TestServer, user_id: &str, password: &str) -> TestResponse {
    server
        .post("/login")
        .json(&json!({ "userId": user_id, "password": password }))
        .await
}

pub async fn login_token(server: &TestServer, user_id: &str) -> String {
    let response = login(server, user_id, "pw").await;
    response.assert_status_ok();
    let body: Value = response.json();
    body["token"]
        .as_str()
        .expect("Login response missing token")
        .to_string()
}

pub async fn add_item(server: &TestServer, token: Option<&str>, payload: Value) -> TestResponse {
    let mut request = server.post("/cart/add").json(&payload);
    if let Some(token) = token {
        request = request.authorization_bearer(token);
    }
    request.await
}

pub async fn get_cart(server: &TestServer, token: Option<&str>) -> TestResponse {
    let mut request = server.get("/cart");
    if let Some(token) = token {
        request = request.authorization_bearer(token);
    }
    request.await
}

pub fn item(product_id: &str, name: &str, price: f64, quantity: i64) -> Value {
    json!({
        "productId": product_id,
        "name": name,
        "price": price,
        "quantity": quantity,
    })
}

/// A token that expired two hours ago, well past the verifier's leeway.
pub fn expired_token(user_id: &str) -> String {
    let now = Utc::now().timestamp();
    sign_token(user_id, now - 7200, now - 10800, TEST_JWT_SECRET)
}

/// A structurally valid token signed with the wrong secret.
pub fn tampered_token(user_id: &str) -> String {
    let now = Utc::now().timestamp();
    sign_token(user_id, now + 3600, now, "not-the-server-secret")
}

fn sign_token(user_id: &str, exp: i64, iat: i64, secret: &str) -> String {
    let claims = TokenClaims {
        sub: user_id.to_string(),
        exp: exp as usize,
        iat: iat as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )
    .expect("Failed to sign test token")
}
