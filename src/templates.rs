// src/templates.rs
use crate::models::{
    assignment::{AssignmentChoice, AssignmentWithCourse},
    course::{Course, CourseChoice},
    submission::{Submission, SubmissionReview},
};
use askama::Template;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomePage;

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    // Inline message for a taken username.
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "student_dashboard.html")]
pub struct StudentDashboardPage {
    pub username: String,
    pub enrolled: Vec<CourseChoice>,
}

#[derive(Template)]
#[template(path = "faculty_dashboard.html")]
pub struct FacultyDashboardPage {
    pub username: String,
}

#[derive(Template)]
#[template(path = "create_course.html")]
pub struct CreateCoursePage;

#[derive(Template)]
#[template(path = "view_courses.html")]
pub struct ViewCoursesPage {
    pub courses: Vec<Course>,
    // Enroll buttons only make sense for a logged-in student.
    pub can_enroll: bool,
}

#[derive(Template)]
#[template(path = "create_assignment.html")]
pub struct CreateAssignmentPage {
    pub courses: Vec<CourseChoice>,
}

#[derive(Template)]
#[template(path = "view_assignments.html")]
pub struct ViewAssignmentsPage {
    pub assignments: Vec<AssignmentWithCourse>,
}

#[derive(Template)]
#[template(path = "submit_assignment.html")]
pub struct SubmitAssignmentPage {
    pub assignments: Vec<AssignmentChoice>,
}

#[derive(Template)]
#[template(path = "view_submissions.html")]
pub struct ViewSubmissionsPage {
    pub submissions: Vec<SubmissionReview>,
}

#[derive(Template)]
#[template(path = "provide_feedback.html")]
pub struct ProvideFeedbackPage {
    pub submission: Submission,
}
