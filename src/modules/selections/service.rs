use uuid::Uuid;

use crate::modules::selections::model::{CreateSelectionDto, NewSelection, Selection};
use crate::store::{InsertOutcome, Store};
use crate::utils::errors::AppError;

/// Result of adding a class to a cart.
pub enum SelectionOutcome {
    Created(Selection),
    AlreadySelected,
}

pub struct SelectionService;

impl SelectionService {
    pub async fn add_selection(
        store: &dyn Store,
        dto: CreateSelectionDto,
    ) -> Result<SelectionOutcome, AppError> {
        let new = NewSelection {
            class_id: dto.class_id,
            user_email: dto.user_email,
        };

        match store.insert_selection(new).await? {
            InsertOutcome::Created(selection) => Ok(SelectionOutcome::Created(selection)),
            InsertOutcome::Duplicate => Ok(SelectionOutcome::AlreadySelected),
        }
    }

    pub async fn get_selections_for_user(
        store: &dyn Store,
        email: &str,
    ) -> Result<Vec<Selection>, AppError> {
        Ok(store.list_selections_for_user(email).await?)
    }

    /// Removes a selection by id. The stored record's owner must match the
    /// verified caller; anyone else is refused before the delete.
    pub async fn remove_selection(
        store: &dyn Store,
        id: Uuid,
        requester_email: &str,
    ) -> Result<(), AppError> {
        let selection = store
            .find_selection(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("no selection with id {id}")))?;

        if selection.user_email != requester_email {
            return Err(AppError::forbidden("forbidden access"));
        }

        store.delete_selection(id).await?;
        Ok(())
    }
}
