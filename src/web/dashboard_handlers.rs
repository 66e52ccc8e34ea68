// src/web/dashboard_handlers.rs
use crate::{
    error::AppResult,
    services::course_service,
    state::AppState,
    templates::{FacultyDashboardPage, StudentDashboardPage},
    web::mw_auth::CurrentUser,
};
use askama::Template;
use axum::{
    extract::{Extension, State},
    response::{Html, IntoResponse},
};

// GET /student_dashboard
pub async fn student_dashboard(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let enrolled = course_service::list_enrolled_courses(&state.db_pool, user.id).await?;
    let page = StudentDashboardPage {
        username: user.username,
        enrolled,
    };
    Ok(Html(page.render()?))
}

// GET /faculty_dashboard
pub async fn faculty_dashboard(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let page = FacultyDashboardPage {
        username: user.username,
    };
    Ok(Html(page.render()?))
}
