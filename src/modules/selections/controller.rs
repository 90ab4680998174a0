use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::selections::model::{CreateSelectionDto, Selection};
use crate::modules::selections::service::{SelectionOutcome, SelectionService};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Add a class to a cart (idempotent on class and user)
#[utoipa::path(
    post,
    path = "/selected",
    request_body = CreateSelectionDto,
    responses(
        (status = 201, description = "Selection created", body = Selection),
        (status = 200, description = "Class already selected; store unchanged", body = MessageResponse),
        (status = 422, description = "Validation error", body = ErrorResponse)
    ),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn add_selection(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSelectionDto>,
) -> Result<Response, AppError> {
    match SelectionService::add_selection(state.store.as_ref(), dto).await? {
        SelectionOutcome::Created(selection) => {
            Ok((StatusCode::CREATED, Json(selection)).into_response())
        }
        SelectionOutcome::AlreadySelected => {
            Ok(Json(MessageResponse::new("class already selected")).into_response())
        }
    }
}

/// Get a user's selections (owner only)
#[utoipa::path(
    get,
    path = "/selected/{email}",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "The user's selections", body = Vec<Selection>),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - token email does not match path", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn get_selections_for_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<Vec<Selection>>, AppError> {
    auth_user.authorize_owner(&email)?;

    let selections =
        SelectionService::get_selections_for_user(state.store.as_ref(), &email).await?;
    Ok(Json(selections))
}

/// Remove a selection by id (owner only)
#[utoipa::path(
    delete,
    path = "/selected/{id}",
    params(("id" = Uuid, Path, description = "Selection ID")),
    responses(
        (status = 200, description = "Selection removed", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Forbidden - selection belongs to another user", body = ErrorResponse),
        (status = 404, description = "No such selection", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Selections"
)]
#[instrument(skip(state))]
pub async fn remove_selection(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    SelectionService::remove_selection(state.store.as_ref(), id, auth_user.email()).await?;
    Ok(Json(MessageResponse::new("selection removed")))
}
