//! Role capability extractors.
//!
//! Tokens are signed over caller-supplied claims, so a claim can never be
//! trusted for authorization. Capability checks therefore resolve the
//! verified email against the user store and test the persisted role.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::middleware::auth::AuthUser;
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Extractor for admin-only operations (role and class-status mutation).
///
/// # Example
///
/// ```rust,ignore
/// pub async fn transition_class(
///     State(state): State<AppState>,
///     RequireAdmin(auth_user): RequireAdmin,
///     Path(id): Path<Uuid>,
/// ) -> Result<Json<Class>, AppError> {
///     // Only admins reach this point.
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let user = state
            .store
            .find_user_by_email(auth_user.email())
            .await?
            .ok_or_else(|| AppError::forbidden("forbidden access"))?;

        if user.role != Role::Admin {
            return Err(AppError::forbidden("forbidden access"));
        }

        Ok(RequireAdmin(auth_user))
    }
}
