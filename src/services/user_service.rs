// src/services/user_service.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{Role, User},
    services::auth_service,
};
use sqlx::SqlitePool;

/// Inserts a new user. Fails with `DuplicateUsername` if the username is
/// already taken.
pub async fn create_user(
    db_pool: &SqlitePool,
    username: &str,
    raw_password: &str,
    role: Role,
) -> AppResult<()> {
    tracing::info!("registering user: {}", username);
    let password_hash = auth_service::hash_password(raw_password).await?;

    let result = sqlx::query("INSERT INTO users (username, password_hash, role) VALUES (?1, ?2, ?3)")
        .bind(username)
        .bind(&password_hash)
        .bind(role)
        .execute(db_pool)
        .await;

    match result {
        Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
            tracing::warn!("registration rejected, username '{}' exists", username);
            Err(AppError::DuplicateUsername)
        }
        Err(e) => Err(e.into()),
        Ok(_) => Ok(()),
    }
}

/// Looks up a user by username and password. An unknown username or a wrong
/// password is an empty result, not an error.
pub async fn find_user_by_credentials(
    db_pool: &SqlitePool,
    username: &str,
    password: &str,
) -> AppResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password_hash, role FROM users WHERE username = ?1",
    )
    .bind(username)
    .fetch_optional(db_pool)
    .await?;

    let Some(user) = user else {
        tracing::debug!("user '{}' not found", username);
        return Ok(None);
    };

    if auth_service::verify_password(password, &user.password_hash).await? {
        Ok(Some(user))
    } else {
        tracing::debug!("wrong password for '{}'", username);
        Ok(None)
    }
}
