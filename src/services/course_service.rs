// src/services/course_service.rs
use crate::{
    error::AppResult,
    models::course::{Course, CourseChoice},
};
use sqlx::SqlitePool;

pub async fn create_course(
    db_pool: &SqlitePool,
    title: &str,
    description: &str,
    content: &str,
    faculty_id: i64,
) -> AppResult<()> {
    tracing::info!("creating course '{}' for faculty {}", title, faculty_id);
    sqlx::query(
        "INSERT INTO courses (title, description, content, faculty_id) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(title)
    .bind(description)
    .bind(content)
    .bind(faculty_id)
    .execute(db_pool)
    .await?;
    Ok(())
}

/// All courses, in insertion order.
pub async fn list_courses(db_pool: &SqlitePool) -> AppResult<Vec<Course>> {
    let courses = sqlx::query_as::<_, Course>(
        "SELECT id, title, description, content, faculty_id FROM courses",
    )
    .fetch_all(db_pool)
    .await?;
    Ok(courses)
}

/// Courses owned by one faculty member, as dropdown choices.
pub async fn list_courses_by_faculty(
    db_pool: &SqlitePool,
    faculty_id: i64,
) -> AppResult<Vec<CourseChoice>> {
    let courses =
        sqlx::query_as::<_, CourseChoice>("SELECT id, title FROM courses WHERE faculty_id = ?1")
            .bind(faculty_id)
            .fetch_all(db_pool)
            .await?;
    Ok(courses)
}

pub async fn enroll_student(
    db_pool: &SqlitePool,
    student_id: i64,
    course_id: i64,
) -> AppResult<()> {
    tracing::info!("enrolling student {} in course {}", student_id, course_id);
    sqlx::query("INSERT INTO student_courses (student_id, course_id) VALUES (?1, ?2)")
        .bind(student_id)
        .bind(course_id)
        .execute(db_pool)
        .await?;
    Ok(())
}

/// Courses a student has enrolled in, for the student dashboard.
pub async fn list_enrolled_courses(
    db_pool: &SqlitePool,
    student_id: i64,
) -> AppResult<Vec<CourseChoice>> {
    let courses = sqlx::query_as::<_, CourseChoice>(
        r#"
        SELECT c.id, c.title
        FROM courses c
        JOIN student_courses sc ON sc.course_id = c.id
        WHERE sc.student_id = ?1
        "#,
    )
    .bind(student_id)
    .fetch_all(db_pool)
    .await?;
    Ok(courses)
}
