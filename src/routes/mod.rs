pub mod contact;

use axum::Router;
use axum::routing::post;

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new()
        .route("/contact", post(contact::submit))
        // Older widget builds post with a trailing slash
        .route("/contact/", post(contact::submit))
}
