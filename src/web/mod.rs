// src/web/mod.rs
pub mod assignment_handlers;
pub mod auth_handlers;
pub mod course_handlers;
pub mod dashboard_handlers;
pub mod mw_auth;
pub mod mw_role;
pub mod routes;
pub mod submission_handlers;
