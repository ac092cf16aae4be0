use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::models::auth::responses::{LoginResponse, TokenClaims};
use crate::services::errors::auth_service_errors::AuthServiceError;

#[cfg(test)]
use mockall::automock;

/// Issued tokens are valid for exactly one hour.
pub const TOKEN_LIFETIME_SECS: i64 = 60 * 60;

#[cfg_attr(test, automock)]
pub trait AuthServiceTrait: Send + Sync {
    fn login(&self, user_id: &str, password: &str) -> Result<LoginResponse, AuthServiceError>;
    fn issue_token(&self, user_id: &str) -> Result<LoginResponse, AuthServiceError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError>;
    fn subject_from_token(&self, token: &str) -> Result<String, AuthServiceError>;
}

pub struct AuthService {
    jwt_secret: String,
}

impl AuthService {
    pub fn new(jwt_secret: String) -> Self {
        AuthService { jwt_secret }
    }
}

impl AuthServiceTrait for AuthService {
    fn login(&self, user_id: &str, password: &str) -> Result<LoginResponse, AuthServiceError> {
        if user_id.is_empty() || password.is_empty() {
            return Err(AuthServiceError::ValidationError(
                "Invalid credentials".to_string(),
            ));
        }

        // There is no stored-credential backend; any non-empty password is
        // accepted and the subject is taken from the request as-is.
        self.issue_token(user_id)
    }

    fn issue_token(&self, user_id: &str) -> Result<LoginResponse, AuthServiceError> {
        let now = Utc::now();
        let exp = (now + Duration::seconds(TOKEN_LIFETIME_SECS)).timestamp() as usize;
        let iat = now.timestamp() as usize;

        let claims = TokenClaims {
            sub: user_id.to_string(),
            exp,
            iat,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(|e| AuthServiceError::JwtError(e.to_string()))?;

        Ok(LoginResponse {
            token,
            token_type: "Bearer".to_string(),
            expires_in: TOKEN_LIFETIME_SECS,
        })
    }

    fn verify_token(&self, token: &str) -> Result<TokenClaims, AuthServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let validation = Validation::default();

        match decode::<TokenClaims>(token, &decoding_key, &validation) {
            Ok(token_data) => Ok(token_data.claims),
            Err(err) => match err.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    Err(AuthServiceError::ExpiredToken)
                }
                _ => Err(AuthServiceError::InvalidToken),
            },
        }
    }

    fn subject_from_token(&self, token: &str) -> Result<String, AuthServiceError> {
        let claims = self.verify_token(token)?;
        Ok(claims.sub)
    }
}
