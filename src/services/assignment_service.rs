// src/services/assignment_service.rs
use crate::{
    error::AppResult,
    models::assignment::{AssignmentChoice, AssignmentWithCourse},
};
use sqlx::SqlitePool;

pub async fn create_assignment(
    db_pool: &SqlitePool,
    course_id: i64,
    question: &str,
    due_date: &str,
) -> AppResult<()> {
    tracing::info!("creating assignment for course {}", course_id);
    sqlx::query("INSERT INTO assignments (course_id, question, due_date) VALUES (?1, ?2, ?3)")
        .bind(course_id)
        .bind(question)
        .bind(due_date)
        .execute(db_pool)
        .await?;
    Ok(())
}

/// Every assignment joined with its parent course title, for the student
/// assignment listing.
pub async fn list_with_course_title(db_pool: &SqlitePool) -> AppResult<Vec<AssignmentWithCourse>> {
    let assignments = sqlx::query_as::<_, AssignmentWithCourse>(
        r#"
        SELECT c.title AS course_title, a.question, a.due_date
        FROM courses c
        JOIN assignments a ON c.id = a.course_id
        "#,
    )
    .fetch_all(db_pool)
    .await?;
    Ok(assignments)
}

/// All assignments as dropdown choices for the submit form.
pub async fn list_choices(db_pool: &SqlitePool) -> AppResult<Vec<AssignmentChoice>> {
    let assignments =
        sqlx::query_as::<_, AssignmentChoice>("SELECT id, question FROM assignments")
            .fetch_all(db_pool)
            .await?;
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::user::Role;
    use crate::services::{course_service, user_service};

    #[tokio::test]
    async fn assignment_listing_carries_the_course_title() {
        let pool = test_pool().await;
        user_service::create_user(&pool, "prof", "pw", Role::Faculty)
            .await
            .unwrap();
        let faculty_id: i64 = sqlx::query_scalar("SELECT id FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();

        course_service::create_course(&pool, "Calculus", "intro", "limits", faculty_id)
            .await
            .unwrap();
        let course_id: i64 = sqlx::query_scalar("SELECT id FROM courses")
            .fetch_one(&pool)
            .await
            .unwrap();

        create_assignment(&pool, course_id, "Prove the chain rule", "2026-09-01")
            .await
            .unwrap();

        let listed = list_with_course_title(&pool).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].course_title, "Calculus");
        assert_eq!(listed[0].question, "Prove the chain rule");
        assert_eq!(listed[0].due_date, "2026-09-01");

        let choices = list_choices(&pool).await.unwrap();
        assert_eq!(choices.len(), 1);
        assert_eq!(choices[0].question, "Prove the chain rule");
    }
}
