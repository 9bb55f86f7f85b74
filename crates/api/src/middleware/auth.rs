//! Static-token authentication for the game-server API.
//!
//! Every non-health request must carry the configured shared secret in
//! its `Authorization` header. There are no users or sessions; the only
//! caller is the game server itself.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use playcrate_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Middleware that rejects requests without the shared API token.
pub async fn require_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok());

    match token {
        None => Err(AppError::Core(CoreError::Unauthorized(
            "No token provided".into(),
        ))),
        Some(t) if t != state.config.auth_token => Err(AppError::Core(CoreError::Unauthorized(
            "Invalid token".into(),
        ))),
        Some(_) => Ok(next.run(request).await),
    }
}
