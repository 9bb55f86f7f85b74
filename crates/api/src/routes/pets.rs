//! Routes for the pet-ownership registry.

use axum::routing::post;
use axum::Router;

use crate::handlers::pets;
use crate::state::AppState;

/// ```text
/// POST /pets-exist -> pets_existance (payload-dispatched)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/pets-exist", post(pets::pets_existance))
}
