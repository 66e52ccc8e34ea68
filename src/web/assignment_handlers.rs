// src/web/assignment_handlers.rs
use crate::{
    error::AppResult,
    models::{assignment::CreateAssignmentForm, submission::SubmitAssignmentForm},
    services::{assignment_service, course_service, submission_service},
    state::AppState,
    templates::{CreateAssignmentPage, SubmitAssignmentPage, ViewAssignmentsPage},
    web::mw_auth::CurrentUser,
};
use askama::Template;
use axum::{
    extract::{Extension, Form, State},
    response::{Html, IntoResponse, Redirect},
};

// GET /create_assignment — only the faculty member's own courses are offered.
pub async fn show_create_assignment_form(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> AppResult<impl IntoResponse> {
    let courses = course_service::list_courses_by_faculty(&state.db_pool, user.id).await?;
    Ok(Html(CreateAssignmentPage { courses }.render()?))
}

// POST /create_assignment
pub async fn handle_create_assignment(
    State(state): State<AppState>,
    Form(form): Form<CreateAssignmentForm>,
) -> AppResult<Redirect> {
    assignment_service::create_assignment(
        &state.db_pool,
        form.course_id,
        &form.question,
        &form.due_date,
    )
    .await?;
    Ok(Redirect::to("/faculty_dashboard"))
}

// GET /view_assignments
pub async fn view_assignments(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assignments = assignment_service::list_with_course_title(&state.db_pool).await?;
    Ok(Html(ViewAssignmentsPage { assignments }.render()?))
}

// GET /submit_assignment
pub async fn show_submit_assignment_form(
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let assignments = assignment_service::list_choices(&state.db_pool).await?;
    Ok(Html(SubmitAssignmentPage { assignments }.render()?))
}

// POST /submit_assignment
pub async fn handle_submit_assignment(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<SubmitAssignmentForm>,
) -> AppResult<Redirect> {
    submission_service::create_submission(&state.db_pool, form.assignment_id, user.id, &form.answer)
        .await?;
    Ok(Redirect::to("/view_assignments"))
}
