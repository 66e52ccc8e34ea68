// src/web/auth_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::user::{AuthUser, LoginForm, RegisterForm},
    services::user_service,
    state::AppState,
    templates::{HomePage, LoginPage, RegisterPage},
    web::mw_auth::SESSION_USER_KEY,
};
use askama::Template;
use axum::{
    extract::{Form, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

// GET /
pub async fn home() -> AppResult<impl IntoResponse> {
    Ok(Html(HomePage.render()?))
}

// GET /register
pub async fn show_register_form() -> AppResult<impl IntoResponse> {
    Ok(Html(RegisterPage { error: None }.render()?))
}

// POST /register
// A duplicate username re-renders the form with an inline message; success
// goes to the login page without logging the new user in.
pub async fn handle_register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    match user_service::create_user(&state.db_pool, &form.username, &form.password, form.role).await
    {
        Ok(()) => Ok(Redirect::to("/login").into_response()),
        Err(AppError::DuplicateUsername) => {
            let page = RegisterPage {
                error: Some("Username already exists!".to_string()),
            };
            Ok(Html(page.render()?).into_response())
        }
        Err(e) => Err(e),
    }
}

// GET /login
pub async fn show_login_form(session: Session) -> AppResult<Response> {
    // Already logged in: straight to the matching dashboard.
    if let Some(user) = session
        .get::<AuthUser>(SESSION_USER_KEY)
        .await
        .ok()
        .flatten()
    {
        tracing::debug!("GET /login: '{}' already logged in", user.username);
        return Ok(Redirect::to(user.role.dashboard_path()).into_response());
    }
    Ok(Html(LoginPage { error: None }.render()?).into_response())
}

// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    tracing::info!("login attempt for '{}'", form.username);

    match user_service::find_user_by_credentials(&state.db_pool, &form.username, &form.password)
        .await?
    {
        Some(user) => {
            // Fresh session id before storing the identity.
            session
                .cycle_id()
                .await
                .map_err(|e| AppError::Session(format!("failed to cycle session id: {e}")))?;
            let auth_user = AuthUser {
                id: user.id,
                username: user.username,
                role: user.role,
            };
            session
                .insert(SESSION_USER_KEY, &auth_user)
                .await
                .map_err(|e| AppError::Session(format!("failed to write session: {e}")))?;

            tracing::info!("✅ login succeeded for '{}'", auth_user.username);
            Ok(Redirect::to(auth_user.role.dashboard_path()).into_response())
        }
        None => {
            tracing::warn!("login failed for '{}'", form.username);
            let page = LoginPage {
                error: Some("Invalid credentials!".to_string()),
            };
            Ok(Html(page.render()?).into_response())
        }
    }
}

// GET /logout
pub async fn handle_logout(session: Session) -> AppResult<Redirect> {
    let user: Option<AuthUser> = session.get(SESSION_USER_KEY).await.ok().flatten();

    session
        .delete()
        .await
        .map_err(|e| AppError::Session(format!("failed to delete session: {e}")))?;

    match user {
        Some(u) => tracing::info!("🚪 '{}' logged out", u.username),
        None => tracing::info!("🚪 anonymous session cleared"),
    }

    Ok(Redirect::to("/login"))
}
