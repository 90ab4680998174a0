//! Class data models and DTOs.
//!
//! A class moves through a small state machine:
//!
//! ```text
//! pending ──→ approved
//!    └──────→ denied
//! ```
//!
//! Both `approved` and `denied` are terminal; no transition leads back to
//! `pending`. Feedback is orthogonal to status and can be attached at any
//! point, with or without a status change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lifecycle state of a class. Every submission starts out pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ClassStatus {
    Pending,
    Approved,
    Denied,
}

impl ClassStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassStatus::Pending => "pending",
            ClassStatus::Approved => "approved",
            ClassStatus::Denied => "denied",
        }
    }
}

impl fmt::Display for ClassStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClassStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ClassStatus::Pending),
            "approved" => Ok(ClassStatus::Approved),
            "denied" => Ok(ClassStatus::Denied),
            other => Err(format!("invalid class status: {other}")),
        }
    }
}

/// A class offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Class {
    pub id: Uuid,
    pub title: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i32,
    pub status: ClassStatus,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for an instructor's class submission.
///
/// There is no status field: the caller cannot pick an initial state, the
/// store persists every submission as pending.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateClassDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub image: Option<String>,
    #[validate(length(min = 1))]
    pub instructor_name: String,
    #[validate(email)]
    pub instructor_email: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 0))]
    pub available_seats: i32,
}

/// Insert payload handed to the class store.
#[derive(Debug, Clone)]
pub struct NewClass {
    pub title: String,
    pub image: Option<String>,
    pub instructor_name: String,
    pub instructor_email: String,
    pub price: f64,
    pub available_seats: i32,
}

/// Body of `PATCH /classes/admin/{id}`.
///
/// `status` is a free string so unrecognized values deserialize and fall
/// through as a no-op instead of rejecting the request. `feedback` applies
/// independently of any status change; both may be sent in one call.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TransitionClassDto {
    pub status: Option<String>,
    pub feedback: Option<String>,
}

/// Field updates handed to the class store; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct ClassUpdate {
    pub status: Option<ClassStatus>,
    pub feedback: Option<String>,
}

impl ClassUpdate {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.feedback.is_none()
    }
}
