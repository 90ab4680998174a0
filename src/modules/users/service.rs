use uuid::Uuid;

use crate::modules::users::model::{NewUser, RegisterUserDto, Role, User};
use crate::store::{InsertOutcome, Store};
use crate::utils::errors::AppError;

/// Result of a registration attempt.
pub enum RegisterOutcome {
    Created(User),
    AlreadyExisted,
}

/// Result of an admin role update.
#[derive(Debug)]
pub enum RoleUpdateOutcome {
    Updated(Role),
    /// The submitted role was outside {admin, instructor}; nothing changed.
    Unchanged,
}

pub struct UserService;

impl UserService {
    pub async fn register_user(
        store: &dyn Store,
        dto: RegisterUserDto,
    ) -> Result<RegisterOutcome, AppError> {
        // Self-registration never grants a privileged role.
        let new = NewUser {
            name: dto.name,
            email: dto.email,
            photo_url: dto.photo_url,
            role: Role::Student,
        };

        match store.insert_user(new).await? {
            InsertOutcome::Created(user) => Ok(RegisterOutcome::Created(user)),
            InsertOutcome::Duplicate => Ok(RegisterOutcome::AlreadyExisted),
        }
    }

    pub async fn get_users(store: &dyn Store) -> Result<Vec<User>, AppError> {
        Ok(store.list_users().await?)
    }

    pub async fn get_instructors(store: &dyn Store) -> Result<Vec<User>, AppError> {
        Ok(store.list_users_by_role(Role::Instructor).await?)
    }

    pub async fn get_user_by_email(store: &dyn Store, email: &str) -> Result<User, AppError> {
        store
            .find_user_by_email(email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("no user with email {email}")))
    }

    pub async fn set_user_role(
        store: &dyn Store,
        id: Uuid,
        role: &str,
    ) -> Result<RoleUpdateOutcome, AppError> {
        match role.parse::<Role>() {
            Ok(role @ (Role::Admin | Role::Instructor)) => {
                if store.set_user_role(id, role).await? {
                    Ok(RoleUpdateOutcome::Updated(role))
                } else {
                    Err(AppError::not_found(format!("no user with id {id}")))
                }
            }
            // Any other value, "student" included, is a silent no-op.
            _ => Ok(RoleUpdateOutcome::Unchanged),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn register_dto(email: &str) -> RegisterUserDto {
        RegisterUserDto {
            name: "Test User".to_string(),
            email: email.to_string(),
            photo_url: None,
        }
    }

    #[tokio::test]
    async fn test_register_forces_student_role() {
        let store = MemoryStore::new();
        let outcome = UserService::register_user(&store, register_dto("a@x.com"))
            .await
            .unwrap();
        match outcome {
            RegisterOutcome::Created(user) => assert_eq!(user.role, Role::Student),
            RegisterOutcome::AlreadyExisted => panic!("expected creation"),
        }
    }

    #[tokio::test]
    async fn test_register_twice_reports_existing() {
        let store = MemoryStore::new();
        UserService::register_user(&store, register_dto("a@x.com"))
            .await
            .unwrap();
        let second = UserService::register_user(&store, register_dto("a@x.com"))
            .await
            .unwrap();
        assert!(matches!(second, RegisterOutcome::AlreadyExisted));
        assert_eq!(UserService::get_users(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_set_user_role_ignores_unknown_values() {
        let store = MemoryStore::new();
        let user = match UserService::register_user(&store, register_dto("a@x.com"))
            .await
            .unwrap()
        {
            RegisterOutcome::Created(user) => user,
            RegisterOutcome::AlreadyExisted => unreachable!(),
        };

        for value in ["superuser", "student", ""] {
            let outcome = UserService::set_user_role(&store, user.id, value)
                .await
                .unwrap();
            assert!(matches!(outcome, RoleUpdateOutcome::Unchanged));
        }
        let unchanged = UserService::get_user_by_email(&store, "a@x.com")
            .await
            .unwrap();
        assert_eq!(unchanged.role, Role::Student);

        let outcome = UserService::set_user_role(&store, user.id, "instructor")
            .await
            .unwrap();
        assert!(matches!(outcome, RoleUpdateOutcome::Updated(Role::Instructor)));
        let promoted = UserService::get_user_by_email(&store, "a@x.com")
            .await
            .unwrap();
        assert_eq!(promoted.role, Role::Instructor);
    }

    #[tokio::test]
    async fn test_set_user_role_unknown_id_is_not_found() {
        let store = MemoryStore::new();
        let err = UserService::set_user_role(&store, Uuid::new_v4(), "admin")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
