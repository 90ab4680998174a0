use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::users::model::{RegisterUserDto, UpdateRoleDto, User};
use crate::modules::users::service::{RegisterOutcome, RoleUpdateOutcome, UserService};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Register a new user (idempotent on email)
#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterUserDto,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 200, description = "User already existed; store unchanged", body = MessageResponse),
        (status = 422, description = "Validation error", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RegisterUserDto>,
) -> Result<Response, AppError> {
    match UserService::register_user(state.store.as_ref(), dto).await? {
        RegisterOutcome::Created(user) => Ok((StatusCode::CREATED, Json(user)).into_response()),
        RegisterOutcome::AlreadyExisted => {
            Ok(Json(MessageResponse::new("user already existed")).into_response())
        }
    }
}

/// Get all users (requires authentication)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Unauthorized - missing or invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_users(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(state.store.as_ref()).await?;
    Ok(Json(users))
}

/// Get all instructors (public)
#[utoipa::path(
    get,
    path = "/users/instructor",
    responses(
        (status = 200, description = "Users with the instructor role", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_instructors(
    State(state): State<AppState>,
) -> Result<Json<Vec<User>>, AppError> {
    let instructors = UserService::get_instructors(state.store.as_ref()).await?;
    Ok(Json(instructors))
}

/// Get a user by email (owner only)
#[utoipa::path(
    get,
    path = "/users/{email}",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - token email does not match path", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    auth_user.authorize_owner(&email)?;

    let user = UserService::get_user_by_email(state.store.as_ref(), &email).await?;
    Ok(Json(user))
}

/// Update a user's role (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(("id" = Uuid, Path, description = "User ID")),
    request_body = UpdateRoleDto,
    responses(
        (status = 200, description = "Role applied, or ignored for values outside {admin, instructor}", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such user", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn update_user_role(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(dto): Json<UpdateRoleDto>,
) -> Result<Json<MessageResponse>, AppError> {
    let message =
        match UserService::set_user_role(state.store.as_ref(), id, &dto.role).await? {
            RoleUpdateOutcome::Updated(role) => format!("user role updated to {role}"),
            RoleUpdateOutcome::Unchanged => "user role unchanged".to_string(),
        };
    Ok(Json(MessageResponse::new(message)))
}
