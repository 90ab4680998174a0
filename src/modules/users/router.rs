use axum::{
    Router,
    routing::{get, patch},
};

use super::controller::{
    get_instructors, get_user_by_email, get_users, register_user, update_user_role,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(register_user))
        .route("/instructor", get(get_instructors))
        .route("/admin/{id}", patch(update_user_role))
        .route("/{email}", get(get_user_by_email))
}
