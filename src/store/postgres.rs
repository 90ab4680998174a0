//! PostgreSQL store implementation.
//!
//! Rows are fetched into plain row structs and mapped to domain models at
//! this boundary; `role` and `status` are TEXT columns constrained by the
//! schema, so a value outside the closed set is a corrupt record, not a
//! decoding fallback.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::modules::classes::model::{Class, ClassStatus, ClassUpdate, NewClass};
use crate::modules::selections::model::{NewSelection, Selection};
use crate::modules::users::model::{NewUser, Role, User};
use crate::store::{ClassStore, InsertOutcome, SelectionStore, StoreError, UserStore};

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const USER_COLUMNS: &str = "id, name, email, photo_url, role, created_at, updated_at";
const CLASS_COLUMNS: &str = "id, title, image, instructor_name, instructor_email, price, \
     available_seats, status, feedback, created_at, updated_at";
const SELECTION_COLUMNS: &str = "id, class_id, user_email, created_at";

#[derive(FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    photo_url: Option<String>,
    role: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, StoreError> {
        let role = self.role.parse::<Role>().map_err(|_| {
            StoreError::Corrupt(format!("user {} has role {:?}", self.id, self.role))
        })?;
        Ok(User {
            id: self.id,
            name: self.name,
            email: self.email,
            photo_url: self.photo_url,
            role,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(FromRow)]
struct ClassRow {
    id: Uuid,
    title: String,
    image: Option<String>,
    instructor_name: String,
    instructor_email: String,
    price: f64,
    available_seats: i32,
    status: String,
    feedback: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ClassRow {
    fn into_class(self) -> Result<Class, StoreError> {
        let status = self.status.parse::<ClassStatus>().map_err(|_| {
            StoreError::Corrupt(format!("class {} has status {:?}", self.id, self.status))
        })?;
        Ok(Class {
            id: self.id,
            title: self.title,
            image: self.image,
            instructor_name: self.instructor_name,
            instructor_email: self.instructor_email,
            price: self.price,
            available_seats: self.available_seats,
            status,
            feedback: self.feedback,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(FromRow)]
struct SelectionRow {
    id: Uuid,
    class_id: Uuid,
    user_email: String,
    created_at: DateTime<Utc>,
}

impl From<SelectionRow> for Selection {
    fn from(row: SelectionRow) -> Self {
        Selection {
            id: row.id,
            class_id: row.class_id,
            user_email: row.user_email,
            created_at: row.created_at,
        }
    }
}

fn collect_users(rows: Vec<UserRow>) -> Result<Vec<User>, StoreError> {
    rows.into_iter().map(UserRow::into_user).collect()
}

fn collect_classes(rows: Vec<ClassRow>) -> Result<Vec<Class>, StoreError> {
    rows.into_iter().map(ClassRow::into_class).collect()
}

#[async_trait]
impl UserStore for PgStore {
    async fn insert_user(&self, new: NewUser) -> Result<InsertOutcome<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "INSERT INTO users (id, name, email, photo_url, role) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (email) DO NOTHING \
             RETURNING {USER_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&new.name)
        .bind(&new.email)
        .bind(&new.photo_url)
        .bind(new.role.as_str())
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(InsertOutcome::Created(row.into_user()?)),
            None => Ok(InsertOutcome::Duplicate),
        }
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        collect_users(rows)
    }

    async fn list_users_by_role(&self, role: Role) -> Result<Vec<User>, StoreError> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE role = $1 ORDER BY created_at"
        ))
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await?;
        collect_users(rows)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn set_user_role(&self, id: Uuid, role: Role) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE users SET role = $2, updated_at = now() WHERE id = $1")
            .bind(id)
            .bind(role.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl ClassStore for PgStore {
    async fn insert_class(&self, new: NewClass) -> Result<Class, StoreError> {
        // Status is left to the schema default of 'pending'.
        let row = sqlx::query_as::<_, ClassRow>(&format!(
            "INSERT INTO classes \
             (id, title, image, instructor_name, instructor_email, price, available_seats) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&new.title)
        .bind(&new.image)
        .bind(&new.instructor_name)
        .bind(&new.instructor_email)
        .bind(new.price)
        .bind(new.available_seats)
        .fetch_one(&self.pool)
        .await?;
        row.into_class()
    }

    async fn list_classes(&self) -> Result<Vec<Class>, StoreError> {
        let rows = sqlx::query_as::<_, ClassRow>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes ORDER BY created_at"
        ))
        .fetch_all(&self.pool)
        .await?;
        collect_classes(rows)
    }

    async fn list_classes_by_status(
        &self,
        status: ClassStatus,
    ) -> Result<Vec<Class>, StoreError> {
        let rows = sqlx::query_as::<_, ClassRow>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE status = $1 ORDER BY created_at"
        ))
        .bind(status.as_str())
        .fetch_all(&self.pool)
        .await?;
        collect_classes(rows)
    }

    async fn list_classes_by_instructor(&self, email: &str) -> Result<Vec<Class>, StoreError> {
        let rows = sqlx::query_as::<_, ClassRow>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE instructor_email = $1 ORDER BY created_at"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        collect_classes(rows)
    }

    async fn find_class(&self, id: Uuid) -> Result<Option<Class>, StoreError> {
        let row = sqlx::query_as::<_, ClassRow>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ClassRow::into_class).transpose()
    }

    async fn update_class(
        &self,
        id: Uuid,
        update: ClassUpdate,
    ) -> Result<Option<Class>, StoreError> {
        let row = sqlx::query_as::<_, ClassRow>(&format!(
            "UPDATE classes SET \
             status = COALESCE($2, status), \
             feedback = COALESCE($3, feedback), \
             updated_at = now() \
             WHERE id = $1 \
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(id)
        .bind(update.status.map(ClassStatus::as_str))
        .bind(&update.feedback)
        .fetch_optional(&self.pool)
        .await?;
        row.map(ClassRow::into_class).transpose()
    }

    async fn delete_class(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl SelectionStore for PgStore {
    async fn insert_selection(
        &self,
        new: NewSelection,
    ) -> Result<InsertOutcome<Selection>, StoreError> {
        let row = sqlx::query_as::<_, SelectionRow>(&format!(
            "INSERT INTO selections (id, class_id, user_email) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (class_id, user_email) DO NOTHING \
             RETURNING {SELECTION_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(new.class_id)
        .bind(&new.user_email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some(row) => InsertOutcome::Created(row.into()),
            None => InsertOutcome::Duplicate,
        })
    }

    async fn list_selections_for_user(&self, email: &str) -> Result<Vec<Selection>, StoreError> {
        let rows = sqlx::query_as::<_, SelectionRow>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selections WHERE user_email = $1 ORDER BY created_at"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Selection::from).collect())
    }

    async fn find_selection(&self, id: Uuid) -> Result<Option<Selection>, StoreError> {
        let row = sqlx::query_as::<_, SelectionRow>(&format!(
            "SELECT {SELECTION_COLUMNS} FROM selections WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Selection::from))
    }

    async fn delete_selection(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM selections WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
