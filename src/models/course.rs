// src/models/course.rs
use serde::Deserialize;
use sqlx::FromRow;

// A course row from the 'courses' table.
#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub content: String,
    pub faculty_id: i64,
}

// Slim projection for dropdowns and dashboard listings.
#[derive(Debug, Clone, FromRow)]
pub struct CourseChoice {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseForm {
    pub title: String,
    pub description: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct EnrollForm {
    pub course_id: i64,
}
