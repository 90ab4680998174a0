use uuid::Uuid;

use crate::modules::classes::model::{
    Class, ClassStatus, ClassUpdate, CreateClassDto, NewClass, TransitionClassDto,
};
use crate::store::Store;
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    pub async fn create_class(store: &dyn Store, dto: CreateClassDto) -> Result<Class, AppError> {
        let new = NewClass {
            title: dto.title,
            image: dto.image,
            instructor_name: dto.instructor_name,
            instructor_email: dto.instructor_email,
            price: dto.price,
            available_seats: dto.available_seats,
        };
        Ok(store.insert_class(new).await?)
    }

    pub async fn get_classes(store: &dyn Store) -> Result<Vec<Class>, AppError> {
        Ok(store.list_classes().await?)
    }

    pub async fn get_approved_classes(store: &dyn Store) -> Result<Vec<Class>, AppError> {
        Ok(store.list_classes_by_status(ClassStatus::Approved).await?)
    }

    pub async fn get_classes_by_instructor(
        store: &dyn Store,
        email: &str,
    ) -> Result<Vec<Class>, AppError> {
        Ok(store.list_classes_by_instructor(email).await?)
    }

    /// Applies an admin transition. "approved" and "denied" are the only
    /// recognized status values; anything else leaves the status untouched.
    /// Feedback applies whenever present, with or without a status change.
    pub async fn transition_class(
        store: &dyn Store,
        id: Uuid,
        dto: TransitionClassDto,
    ) -> Result<Class, AppError> {
        let status = dto.status.as_deref().and_then(|s| match s.parse() {
            Ok(status @ (ClassStatus::Approved | ClassStatus::Denied)) => Some(status),
            // "pending" is not a transition target; unknown strings no-op.
            _ => None,
        });

        let update = ClassUpdate {
            status,
            feedback: dto.feedback,
        };

        let class = if update.is_empty() {
            store.find_class(id).await?
        } else {
            store.update_class(id, update).await?
        };

        class.ok_or_else(|| AppError::not_found(format!("no class with id {id}")))
    }

    pub async fn delete_class(store: &dyn Store, id: Uuid) -> Result<(), AppError> {
        if store.delete_class(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found(format!("no class with id {id}")))
        }
    }
}
