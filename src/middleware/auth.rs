use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::modules::auth::model::Claims;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and provides the verified
/// claims. Requests without a valid credential never reach the handler
/// body.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// The verified email. Immutable for the lifetime of the token.
    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// Ownership check: the path-supplied email must match the verified
    /// identity. Mismatch is a hard refusal; callers `?` this before
    /// touching any store.
    pub fn authorize_owner(&self, email: &str) -> Result<(), AppError> {
        if self.0.email != email {
            return Err(AppError::forbidden("forbidden access"));
        }
        Ok(())
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("unauthorized access"))?;

        let claims = verify_token(token, &state.jwt_config)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth_user(email: &str) -> AuthUser {
        AuthUser(Claims {
            email: email.to_string(),
            extra: serde_json::Map::new(),
        })
    }

    #[test]
    fn test_authorize_owner_matching() {
        assert!(auth_user("a@x.com").authorize_owner("a@x.com").is_ok());
    }

    #[test]
    fn test_authorize_owner_mismatch_is_forbidden() {
        let err = auth_user("a@x.com").authorize_owner("b@x.com").unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }
}
