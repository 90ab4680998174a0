use axum::{Json, extract::State};
use tracing::instrument;
use utoipa::ToSchema;

use super::model::{Claims, TokenResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::issue_token;

#[derive(ToSchema)]
pub struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

/// Issue an identity token over the posted claims
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = Claims,
    responses(
        (status = 200, description = "Signed token", body = TokenResponse),
        (status = 422, description = "Malformed claims (missing email)", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Auth"
)]
#[instrument(skip(state))]
pub async fn issue_jwt(
    State(state): State<AppState>,
    Json(claims): Json<Claims>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = issue_token(&claims, &state.jwt_config)?;
    Ok(Json(TokenResponse { token }))
}
