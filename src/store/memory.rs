//! In-memory store backing the test harness.
//!
//! Mirrors the PostgreSQL implementation's semantics: insert-unless-exists
//! operations are atomic (the mutex covers the whole check-then-insert) and
//! report conflicts as [`InsertOutcome::Duplicate`].

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::modules::classes::model::{Class, ClassStatus, ClassUpdate, NewClass};
use crate::modules::selections::model::{NewSelection, Selection};
use crate::modules::users::model::{NewUser, Role, User};
use crate::store::{ClassStore, InsertOutcome, SelectionStore, StoreError, UserStore};

#[derive(Debug, Default)]
struct Inner {
    users: Vec<User>,
    classes: Vec<Class>,
    selections: Vec<Selection>,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert_user(&self, new: NewUser) -> Result<InsertOutcome<User>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner.users.iter().any(|u| u.email == new.email) {
            return Ok(InsertOutcome::Duplicate);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: new.name,
            email: new.email,
            photo_url: new.photo_url,
            role: new.role,
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());
        Ok(InsertOutcome::Created(user))
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.inner.lock().unwrap().users.clone())
    }

    async fn list_users_by_role(&self, role: Role) -> Result<Vec<User>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.role = role;
                user.updated_at = Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl ClassStore for MemoryStore {
    async fn insert_class(&self, new: NewClass) -> Result<Class, StoreError> {
        let now = Utc::now();
        let class = Class {
            id: Uuid::new_v4(),
            title: new.title,
            image: new.image,
            instructor_name: new.instructor_name,
            instructor_email: new.instructor_email,
            price: new.price,
            available_seats: new.available_seats,
            status: ClassStatus::Pending,
            feedback: None,
            created_at: now,
            updated_at: now,
        };
        self.inner.lock().unwrap().classes.push(class.clone());
        Ok(class)
    }

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError> {
        Ok(self.inner.lock().unwrap().classes.clone())
    }

    async fn list_classes_by_status(
        &self,
        status: ClassStatus,
    ) -> Result<Vec<Class>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .classes
            .iter()
            .filter(|c| c.status == status)
            .cloned()
            .collect())
    }

    async fn list_classes_by_instructor(&self, email: &str) -> Result<Vec<Class>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .classes
            .iter()
            .filter(|c| c.instructor_email == email)
            .cloned()
            .collect())
    }

    async fn find_class(&self, id: Uuid) -> Result<Option<Class>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .classes
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn update_class(
        &self,
        id: Uuid,
        update: ClassUpdate,
    ) -> Result<Option<Class>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        match inner.classes.iter_mut().find(|c| c.id == id) {
            Some(class) => {
                if let Some(status) = update.status {
                    class.status = status;
                }
                if let Some(feedback) = update.feedback {
                    class.feedback = Some(feedback);
                }
                class.updated_at = Utc::now();
                Ok(Some(class.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_class(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.classes.len();
        inner.classes.retain(|c| c.id != id);
        Ok(inner.classes.len() < before)
    }
}

#[async_trait]
impl SelectionStore for MemoryStore {
    async fn insert_selection(
        &self,
        new: NewSelection,
    ) -> Result<InsertOutcome<Selection>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        if inner
            .selections
            .iter()
            .any(|s| s.class_id == new.class_id && s.user_email == new.user_email)
        {
            return Ok(InsertOutcome::Duplicate);
        }
        let selection = Selection {
            id: Uuid::new_v4(),
            class_id: new.class_id,
            user_email: new.user_email,
            created_at: Utc::now(),
        };
        inner.selections.push(selection.clone());
        Ok(InsertOutcome::Created(selection))
    }

    async fn list_selections_for_user(&self, email: &str) -> Result<Vec<Selection>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .selections
            .iter()
            .filter(|s| s.user_email == email)
            .cloned()
            .collect())
    }

    async fn find_selection(&self, id: Uuid) -> Result<Option<Selection>, StoreError> {
        Ok(self
            .inner
            .lock()
            .unwrap()
            .selections
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn delete_selection(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.selections.len();
        inner.selections.retain(|s| s.id != id);
        Ok(inner.selections.len() < before)
    }
}
