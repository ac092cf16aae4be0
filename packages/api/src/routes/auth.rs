use axum::{extract::State, routing::post, Json, Router};
use tracing::{debug, error};

use crate::{error::ApiError, state::AppState};
use shared::models::auth::requests::LoginRequest;
use shared::models::auth::responses::LoginResponse;
use shared::services::auth_service::AuthServiceTrait;

pub fn routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(login_data): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let response = state
        .auth_service
        .login(&login_data.user_id, &login_data.password)
        .map_err(|e| {
            error!("Failed to authenticate user {}: {}", login_data.user_id, e);
            ApiError::from(e)
        })?;
    debug!("Issued token for user {}", login_data.user_id);
    Ok(Json(response))
}
