use axum::{
    Router,
    routing::{get, post},
};

use super::controller::{add_selection, get_selections_for_user, remove_selection};
use crate::state::AppState;

pub fn init_selections_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_selection))
        // GET reads the segment as a user email, DELETE as a selection id;
        // the router only accepts one registration per path shape.
        .route(
            "/{email}",
            get(get_selections_for_user).delete(remove_selection),
        )
}
