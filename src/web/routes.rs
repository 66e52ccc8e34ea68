// src/web/routes.rs
use crate::{
    state::AppState,
    web::{
        assignment_handlers, auth_handlers, course_handlers, dashboard_handlers, mw_auth, mw_role,
        submission_handlers,
    },
};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

pub fn create_router(app_state: AppState) -> Router {
    // --- Public routes ---
    let public_routes = Router::new()
        .route("/", get(auth_handlers::home))
        .route(
            "/register",
            get(auth_handlers::show_register_form).post(auth_handlers::handle_register),
        )
        .route(
            "/login",
            get(auth_handlers::show_login_form).post(auth_handlers::handle_login),
        )
        .route("/logout", get(auth_handlers::handle_logout))
        .route("/view_courses", get(course_handlers::view_courses));

    // --- Student routes ---
    let student_routes = Router::new()
        .route(
            "/student_dashboard",
            get(dashboard_handlers::student_dashboard),
        )
        .route("/view_assignments", get(assignment_handlers::view_assignments))
        .route(
            "/submit_assignment",
            get(assignment_handlers::show_submit_assignment_form)
                .post(assignment_handlers::handle_submit_assignment),
        )
        .route("/enroll", post(course_handlers::handle_enroll))
        .route_layer(middleware::from_fn(mw_role::require_student));

    // --- Faculty routes ---
    let faculty_routes = Router::new()
        .route(
            "/faculty_dashboard",
            get(dashboard_handlers::faculty_dashboard),
        )
        .route(
            "/create_course",
            get(course_handlers::show_create_course_form)
                .post(course_handlers::handle_create_course),
        )
        .route(
            "/create_assignment",
            get(assignment_handlers::show_create_assignment_form)
                .post(assignment_handlers::handle_create_assignment),
        )
        .route("/view_submissions", get(submission_handlers::view_submissions))
        .route(
            "/provide_feedback/{submission_id}",
            get(submission_handlers::show_feedback_form)
                .post(submission_handlers::handle_feedback),
        )
        .route_layer(middleware::from_fn(mw_role::require_faculty));

    // Everything role-gated also requires a login first; require_auth runs
    // before the role checks and injects CurrentUser.
    let protected_routes = Router::new()
        .merge(student_routes)
        .merge(faculty_routes)
        .route_layer(middleware::from_fn(mw_auth::require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(app_state)
}
