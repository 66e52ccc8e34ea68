// src/web/mw_role.rs
use crate::{models::user::Role, web::mw_auth::CurrentUser};
use axum::{
    extract::{Extension, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

// Role gates run after `require_auth`, which guarantees the extension.
// A wrong role gets the same treatment as no session at all: back to /login.

pub async fn require_faculty(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Response {
    if user.role == Role::Faculty {
        next.run(request).await
    } else {
        tracing::warn!("role mw: '{}' is not faculty, redirecting", user.username);
        Redirect::to("/login").into_response()
    }
}

pub async fn require_student(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    request: Request,
    next: Next,
) -> Response {
    if user.role == Role::Student {
        next.run(request).await
    } else {
        tracing::warn!("role mw: '{}' is not a student, redirecting", user.username);
        Redirect::to("/login").into_response()
    }
}
