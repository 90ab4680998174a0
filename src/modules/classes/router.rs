use axum::{
    Router,
    routing::{get, patch, post},
};

use super::controller::{
    create_class, delete_class, get_approved_classes, get_classes, get_classes_by_instructor,
    transition_class,
};
use crate::state::AppState;

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route("/approved", get(get_approved_classes))
        .route("/admin/{id}", patch(transition_class))
        // GET reads the segment as an instructor email, DELETE as a class
        // id; the router only accepts one registration per path shape.
        .route(
            "/{email}",
            get(get_classes_by_instructor).delete(delete_class),
        )
}
