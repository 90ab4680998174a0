//! Selection data models and DTOs.
//!
//! A selection is a student's cart entry for a class. The pair
//! `(class_id, user_email)` is unique: selecting the same class twice is
//! an idempotent no-op reported back as "already selected".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A student's cart entry for a class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub id: Uuid,
    pub class_id: Uuid,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

/// DTO for adding a class to a student's cart.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSelectionDto {
    pub class_id: Uuid,
    #[validate(email)]
    pub user_email: String,
}

/// Insert payload handed to the selection store.
#[derive(Debug, Clone)]
pub struct NewSelection {
    pub class_id: Uuid,
    pub user_email: String,
}
