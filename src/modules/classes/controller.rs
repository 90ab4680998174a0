use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireAdmin;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::classes::model::{Class, CreateClassDto, TransitionClassDto};
use crate::modules::classes::service::ClassService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Submit a new class (requires authentication)
#[utoipa::path(
    post,
    path = "/classes",
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created in pending state", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn create_class(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateClassDto>,
) -> Result<(StatusCode, Json<Class>), AppError> {
    let class = ClassService::create_class(state.store.as_ref(), dto).await?;
    Ok((StatusCode::CREATED, Json(class)))
}

/// Get all classes (requires authentication)
#[utoipa::path(
    get,
    path = "/classes",
    responses(
        (status = 200, description = "All classes, any status", body = Vec<Class>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes(
    State(state): State<AppState>,
    _auth_user: AuthUser,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_classes(state.store.as_ref()).await?;
    Ok(Json(classes))
}

/// Get approved classes (public)
#[utoipa::path(
    get,
    path = "/classes/approved",
    responses(
        (status = 200, description = "Approved classes only", body = Vec<Class>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_approved_classes(
    State(state): State<AppState>,
) -> Result<Json<Vec<Class>>, AppError> {
    let classes = ClassService::get_approved_classes(state.store.as_ref()).await?;
    Ok(Json(classes))
}

/// Get an instructor's classes (owner only)
#[utoipa::path(
    get,
    path = "/classes/{email}",
    params(("email" = String, Path, description = "Instructor email")),
    responses(
        (status = 200, description = "Classes submitted by the instructor", body = Vec<Class>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - token email does not match path", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn get_classes_by_instructor(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Class>>, AppError> {
    auth_user.authorize_owner(&email)?;

    let classes = ClassService::get_classes_by_instructor(state.store.as_ref(), &email).await?;
    Ok(Json(classes))
}

/// Approve, deny, or attach feedback to a class (admin only)
#[utoipa::path(
    patch,
    path = "/classes/admin/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    request_body = TransitionClassDto,
    responses(
        (status = 200, description = "The class after the transition", body = Class),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - caller is not an admin", body = ErrorResponse),
        (status = 404, description = "No such class", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn transition_class(
    State(state): State<AppState>,
    _admin: RequireAdmin,
    Path(id): Path<Uuid>,
    Json(dto): Json<TransitionClassDto>,
) -> Result<Json<Class>, AppError> {
    let class = ClassService::transition_class(state.store.as_ref(), id, dto).await?;
    Ok(Json(class))
}

/// Delete a class by id (requires authentication)
#[utoipa::path(
    delete,
    path = "/classes/{id}",
    params(("id" = Uuid, Path, description = "Class ID")),
    responses(
        (status = 200, description = "Class deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "No such class", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Classes"
)]
#[instrument(skip(state))]
pub async fn delete_class(
    State(state): State<AppState>,
    _auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    ClassService::delete_class(state.store.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("class deleted")))
}
