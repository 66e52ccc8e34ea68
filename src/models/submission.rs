// src/models/submission.rs
use serde::Deserialize;
use sqlx::FromRow;

// A submission row from the 'submissions' table. grade and feedback stay
// NULL until faculty grades it.
#[derive(Debug, Clone, FromRow)]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub answer: String,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

// Join row for the faculty review screen: submission + student username +
// assignment question, scoped to courses the faculty owns.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionReview {
    pub id: i64,
    pub student_username: String,
    pub question: String,
    pub answer: String,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAssignmentForm {
    pub assignment_id: i64,
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct GradeForm {
    pub grade: String,
    pub feedback: String,
}
