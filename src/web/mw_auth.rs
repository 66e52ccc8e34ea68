// src/web/mw_auth.rs
use crate::{error::AppError, models::user::AuthUser};
use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

/// Session key holding the serialized `AuthUser`.
pub const SESSION_USER_KEY: &str = "auth_user";

/// The logged-in user, injected into request extensions by `require_auth`
/// so handlers never touch the session directly.
#[derive(Clone, Debug)]
pub struct CurrentUser(pub AuthUser);

/// Redirects to /login unless the session carries a logged-in user.
pub async fn require_auth(
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    match session.get::<AuthUser>(SESSION_USER_KEY).await {
        Ok(Some(user)) => {
            tracing::debug!("auth mw: '{}' authenticated", user.username);
            request.extensions_mut().insert(CurrentUser(user));
            Ok(next.run(request).await)
        }
        Ok(None) => {
            tracing::debug!("auth mw: no session user, redirecting to /login");
            Ok(Redirect::to("/login").into_response())
        }
        Err(e) => {
            tracing::error!("auth mw: failed to read session: {:?}", e);
            Err(AppError::Session(format!("failed to read session: {e}")))
        }
    }
}
