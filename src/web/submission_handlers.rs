// src/web/submission_handlers.rs
use crate::{
    error::{AppError, AppResult},
    models::submission::GradeForm,
    services::submission_service,
    state::AppState,
    templates::{ProvideFeedbackPage, ViewSubmissionsPage},
    web::mw_auth::CurrentUser,
};
use askama::Template;
use axum::{
    extract::{Extension, Form, Path, State},
    response::{Html, IntoResponse, Redirect},
};

// GET /view_submissions
pub async fn view_submissions(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let submissions = submission_service::list_for_faculty(&state.db_pool, user.id).await?;
    Ok(Html(ViewSubmissionsPage { submissions }.render()?))
}

// GET /provide_feedback/{submission_id}
// A submission outside the faculty member's own courses is treated the same
// as any other unauthorized access.
pub async fn show_feedback_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(submission_id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    let submission = submission_service::get_for_faculty(&state.db_pool, submission_id, user.id)
        .await?
        .ok_or(AppError::Unauthorized)?;
    Ok(Html(ProvideFeedbackPage { submission }.render()?))
}

// POST /provide_feedback/{submission_id}
pub async fn handle_feedback(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(submission_id): Path<i64>,
    Form(form): Form<GradeForm>,
) -> AppResult<Redirect> {
    submission_service::update_grade_for_faculty(
        &state.db_pool,
        submission_id,
        user.id,
        &form.grade,
        &form.feedback,
    )
    .await?;
    Ok(Redirect::to("/faculty_dashboard"))
}
