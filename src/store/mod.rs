//! Persistence trait seam.
//!
//! The resource API talks to storage only through these traits. The
//! process root constructs one implementation at startup ([`postgres`])
//! and injects it via the application state; the test harness swaps in
//! [`memory`] behind the `test-utils` feature.
//!
//! Uniqueness invariants (user email, selection `(class_id, user_email)`)
//! live in the store itself: insert-unless-exists operations are atomic
//! and report a conflict as [`InsertOutcome::Duplicate`] rather than
//! racing a lookup against an insert.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::modules::classes::model::{Class, ClassStatus, ClassUpdate, NewClass};
use crate::modules::selections::model::{NewSelection, Selection};
use crate::modules::users::model::{NewUser, Role, User};

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(#[from] sqlx::Error),
    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// Result of an insert-unless-exists write against a unique key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome<T> {
    Created(T),
    Duplicate,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Atomic insert keyed on email; a conflict yields
    /// [`InsertOutcome::Duplicate`] and leaves the store unchanged.
    async fn insert_user(&self, new: NewUser) -> Result<InsertOutcome<User>, StoreError>;

    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn list_users_by_role(&self, role: Role) -> Result<Vec<User>, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Overwrites the role field; returns `false` when no user matches `id`.
    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait ClassStore: Send + Sync {
    /// Inserts a new class. The stored record always starts out pending.
    async fn insert_class(&self, new: NewClass) -> Result<Class, StoreError>;

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError>;

    async fn list_classes_by_status(&self, status: ClassStatus)
    -> Result<Vec<Class>, StoreError>;

    async fn list_classes_by_instructor(&self, email: &str) -> Result<Vec<Class>, StoreError>;

    async fn find_class(&self, id: Uuid) -> Result<Option<Class>, StoreError>;

    /// Applies the populated fields of `update` and returns the updated
    /// record, or `None` when `id` is unknown.
    async fn update_class(
        &self,
        id: Uuid,
        update: ClassUpdate,
    ) -> Result<Option<Class>, StoreError>;

    async fn delete_class(&self, id: Uuid) -> Result<bool, StoreError>;
}

#[async_trait]
pub trait SelectionStore: Send + Sync {
    /// Atomic insert keyed on `(class_id, user_email)`; a conflict yields
    /// [`InsertOutcome::Duplicate`] and leaves the store unchanged.
    async fn insert_selection(
        &self,
        new: NewSelection,
    ) -> Result<InsertOutcome<Selection>, StoreError>;

    async fn list_selections_for_user(&self, email: &str) -> Result<Vec<Selection>, StoreError>;

    async fn find_selection(&self, id: Uuid) -> Result<Option<Selection>, StoreError>;

    async fn delete_selection(&self, id: Uuid) -> Result<bool, StoreError>;
}

/// The full persistence surface, as held by the application state.
pub trait Store: UserStore + ClassStore + SelectionStore {}

impl<T: UserStore + ClassStore + SelectionStore> Store for T {}
