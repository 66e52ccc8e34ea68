// src/web/course_handlers.rs
use crate::{
    error::AppResult,
    models::{
        course::{CreateCourseForm, EnrollForm},
        user::{AuthUser, Role},
    },
    services::course_service,
    state::AppState,
    templates::{CreateCoursePage, ViewCoursesPage},
    web::mw_auth::{CurrentUser, SESSION_USER_KEY},
};
use askama::Template;
use axum::{
    extract::{Extension, Form, State},
    response::{Html, IntoResponse, Redirect},
};
use tower_sessions::Session;

// GET /create_course
pub async fn show_create_course_form() -> AppResult<impl IntoResponse> {
    Ok(Html(CreateCoursePage.render()?))
}

// POST /create_course
pub async fn handle_create_course(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<CreateCourseForm>,
) -> AppResult<Redirect> {
    course_service::create_course(
        &state.db_pool,
        &form.title,
        &form.description,
        &form.content,
        user.id,
    )
    .await?;
    Ok(Redirect::to("/faculty_dashboard"))
}

// GET /view_courses — public; a logged-in student also gets enroll buttons.
pub async fn view_courses(
    State(state): State<AppState>,
    session: Session,
) -> AppResult<impl IntoResponse> {
    let courses = course_service::list_courses(&state.db_pool).await?;
    let viewer: Option<AuthUser> = session.get(SESSION_USER_KEY).await.ok().flatten();
    let can_enroll = viewer.is_some_and(|u| u.role == Role::Student);
    let page = ViewCoursesPage {
        courses,
        can_enroll,
    };
    Ok(Html(page.render()?))
}

// POST /enroll
pub async fn handle_enroll(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Form(form): Form<EnrollForm>,
) -> AppResult<Redirect> {
    course_service::enroll_student(&state.db_pool, user.id, form.course_id).await?;
    Ok(Redirect::to("/student_dashboard"))
}
