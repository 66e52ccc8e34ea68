// src/services/mod.rs
pub mod assignment_service;
pub mod auth_service;
pub mod course_service;
pub mod submission_service;
pub mod user_service;
