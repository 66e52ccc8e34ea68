// src/models/user.rs
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The two roles the application knows. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Student,
    Faculty,
}

impl Role {
    /// Where a freshly logged-in user of this role lands.
    pub fn dashboard_path(self) -> &'static str {
        match self {
            Role::Student => "/student_dashboard",
            Role::Faculty => "/faculty_dashboard",
        }
    }
}

// A user row from the 'users' table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: Role,
}

/// The identity kept in the session between login and logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}
