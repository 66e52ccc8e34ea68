// src/models/assignment.rs
use serde::Deserialize;
use sqlx::FromRow;

// Slim projection for the submit-assignment dropdown.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentChoice {
    pub id: i64,
    pub question: String,
}

// Join row of an assignment with its parent course title, for students.
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentWithCourse {
    pub course_title: String,
    pub question: String,
    pub due_date: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentForm {
    pub course_id: i64,
    pub question: String,
    // Stored as free text, never parsed.
    pub due_date: String,
}
