use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::models::responses::ErrorResponse;
use shared::services::errors::{
    auth_service_errors::AuthServiceError, cart_service_errors::CartServiceError,
};

#[derive(Debug)]
pub enum ApiError {
    AuthService(AuthServiceError),
    CartService(CartServiceError),
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        ApiError::AuthService(error)
    }
}

impl From<CartServiceError> for ApiError {
    fn from(error: CartServiceError) -> Self {
        ApiError::CartService(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::AuthService(err) => write!(f, "{}", err),
            ApiError::CartService(err) => write!(f, "{}", err),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::AuthService(AuthServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::AuthService(
                AuthServiceError::MissingToken
                | AuthServiceError::InvalidToken
                | AuthServiceError::ExpiredToken,
            ) => StatusCode::UNAUTHORIZED,
            ApiError::AuthService(AuthServiceError::JwtError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::CartService(CartServiceError::ValidationError(_)) => StatusCode::BAD_REQUEST,
            ApiError::CartService(CartServiceError::CartNotFound) => StatusCode::NOT_FOUND,
            ApiError::CartService(CartServiceError::RepositoryError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: ApiError) -> StatusCode {
        error.into_response().status()
    }

    #[test]
    fn test_auth_errors_map_to_expected_statuses() {
        assert_eq!(
            status_of(ApiError::AuthService(AuthServiceError::ValidationError(
                "bad".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::AuthService(AuthServiceError::MissingToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::AuthService(AuthServiceError::InvalidToken)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(ApiError::AuthService(AuthServiceError::ExpiredToken)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_cart_errors_map_to_expected_statuses() {
        assert_eq!(
            status_of(ApiError::CartService(CartServiceError::CartNotFound)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(ApiError::CartService(CartServiceError::ValidationError(
                "bad".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(ApiError::CartService(CartServiceError::RepositoryError(
                "down".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
