// src/error.rs
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("database migration error: {0}")]
    SqlxMigrate(#[from] sqlx::migrate::MigrateError),

    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    #[error("template rendering error: {0}")]
    Template(#[from] askama::Error),

    #[error("failed to process password")]
    PasswordHashing,

    #[error("username already exists")]
    DuplicateUsername,

    #[error("session error: {0}")]
    Session(String),

    #[error("not authorized")]
    Unauthorized,

    #[error("unexpected internal error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Unauthorized is not an error page: protected routes send the
        // browser back to the login form.
        if matches!(self, AppError::Unauthorized) {
            tracing::warn!("unauthorized access, redirecting to /login");
            return Redirect::to("/login").into_response();
        }

        tracing::error!("request failed: {:?}", self);

        let (status, user_message) = match self {
            AppError::Sqlx(_) | AppError::SqlxMigrate(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error accessing data.")
            }
            AppError::EnvVar(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Configuration error."),
            AppError::Template(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error rendering the page.")
            }
            AppError::PasswordHashing => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error processing credentials.")
            }
            AppError::DuplicateUsername => (StatusCode::CONFLICT, "Username already exists!"),
            AppError::Session(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Error managing your session.")
            }
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred."),
        };

        (status, Html(format!(r#"
            <!DOCTYPE html><html><head><title>Error</title><style>body{{font-family:sans-serif;}}</style></head>
            <body><h1>Error {status_code}</h1><p>{message}</p><a href="javascript:history.back()">Back</a></body></html>
         "#, status_code = status.as_u16(), message = user_message))).into_response()
    }
}

pub type AppResult<T = ()> = Result<T, AppError>;
