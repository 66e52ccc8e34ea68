// src/services/submission_service.rs
use crate::{
    error::{AppError, AppResult},
    models::submission::{Submission, SubmissionReview},
};
use sqlx::SqlitePool;

/// Records a student answer. Submitting again inserts a new row; earlier
/// submissions are never overwritten.
pub async fn create_submission(
    db_pool: &SqlitePool,
    assignment_id: i64,
    student_id: i64,
    answer: &str,
) -> AppResult<()> {
    tracing::info!(
        "recording submission from student {} for assignment {}",
        student_id,
        assignment_id
    );
    sqlx::query("INSERT INTO submissions (assignment_id, student_id, answer) VALUES (?1, ?2, ?3)")
        .bind(assignment_id)
        .bind(student_id)
        .bind(answer)
        .execute(db_pool)
        .await?;
    Ok(())
}

/// All submissions for assignments in courses owned by this faculty member.
pub async fn list_for_faculty(
    db_pool: &SqlitePool,
    faculty_id: i64,
) -> AppResult<Vec<SubmissionReview>> {
    let submissions = sqlx::query_as::<_, SubmissionReview>(
        r#"
        SELECT s.id, u.username AS student_username, a.question, s.answer, s.grade, s.feedback
        FROM submissions s
        JOIN assignments a ON s.assignment_id = a.id
        JOIN courses c ON a.course_id = c.id
        JOIN users u ON s.student_id = u.id
        WHERE c.faculty_id = ?1
        "#,
    )
    .bind(faculty_id)
    .fetch_all(db_pool)
    .await?;
    Ok(submissions)
}

/// Fetches one submission, but only if it belongs to a course owned by the
/// acting faculty member.
pub async fn get_for_faculty(
    db_pool: &SqlitePool,
    submission_id: i64,
    faculty_id: i64,
) -> AppResult<Option<Submission>> {
    let submission = sqlx::query_as::<_, Submission>(
        r#"
        SELECT s.id, s.assignment_id, s.student_id, s.answer, s.grade, s.feedback
        FROM submissions s
        JOIN assignments a ON s.assignment_id = a.id
        JOIN courses c ON a.course_id = c.id
        WHERE s.id = ?1 AND c.faculty_id = ?2
        "#,
    )
    .bind(submission_id)
    .bind(faculty_id)
    .fetch_optional(db_pool)
    .await?;
    Ok(submission)
}

/// Overwrites grade and feedback. Keyed by submission id AND owning faculty,
/// so grading someone else's course fails as Unauthorized.
pub async fn update_grade_for_faculty(
    db_pool: &SqlitePool,
    submission_id: i64,
    faculty_id: i64,
    grade: &str,
    feedback: &str,
) -> AppResult<()> {
    let rows_affected = sqlx::query(
        r#"
        UPDATE submissions SET grade = ?1, feedback = ?2
        WHERE id = ?3 AND assignment_id IN (
            SELECT a.id FROM assignments a
            JOIN courses c ON a.course_id = c.id
            WHERE c.faculty_id = ?4
        )
        "#,
    )
    .bind(grade)
    .bind(feedback)
    .bind(submission_id)
    .bind(faculty_id)
    .execute(db_pool)
    .await?
    .rows_affected();

    if rows_affected == 0 {
        tracing::warn!(
            "faculty {} may not grade submission {}",
            faculty_id,
            submission_id
        );
        Err(AppError::Unauthorized)
    } else {
        tracing::info!("submission {} graded", submission_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::user::Role;
    use crate::services::{assignment_service, course_service, user_service};
    use sqlx::SqlitePool;

    struct Fixture {
        faculty_id: i64,
        student_id: i64,
        assignment_id: i64,
    }

    async fn seed(pool: &SqlitePool) -> Fixture {
        user_service::create_user(pool, "prof", "pw", Role::Faculty)
            .await
            .unwrap();
        user_service::create_user(pool, "sam", "pw", Role::Student)
            .await
            .unwrap();
        let faculty_id: i64 =
            sqlx::query_scalar("SELECT id FROM users WHERE username = 'prof'")
                .fetch_one(pool)
                .await
                .unwrap();
        let student_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE username = 'sam'")
            .fetch_one(pool)
            .await
            .unwrap();

        course_service::create_course(pool, "History", "intro", "sources", faculty_id)
            .await
            .unwrap();
        let course_id: i64 = sqlx::query_scalar("SELECT id FROM courses")
            .fetch_one(pool)
            .await
            .unwrap();

        assignment_service::create_assignment(pool, course_id, "Describe 1848", "next week")
            .await
            .unwrap();
        let assignment_id: i64 = sqlx::query_scalar("SELECT id FROM assignments")
            .fetch_one(pool)
            .await
            .unwrap();

        Fixture {
            faculty_id,
            student_id,
            assignment_id,
        }
    }

    #[tokio::test]
    async fn resubmission_creates_a_second_row() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;

        create_submission(&pool, fx.assignment_id, fx.student_id, "first try")
            .await
            .unwrap();
        create_submission(&pool, fx.assignment_id, fx.student_id, "second try")
            .await
            .unwrap();

        let listed = list_for_faculty(&pool, fx.faculty_id).await.unwrap();
        assert_eq!(listed.len(), 2);
        let answers: Vec<&str> = listed.iter().map(|s| s.answer.as_str()).collect();
        assert!(answers.contains(&"first try"));
        assert!(answers.contains(&"second try"));
    }

    #[tokio::test]
    async fn grading_touches_only_grade_and_feedback() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;

        create_submission(&pool, fx.assignment_id, fx.student_id, "my answer")
            .await
            .unwrap();
        let submission_id: i64 = sqlx::query_scalar("SELECT id FROM submissions")
            .fetch_one(&pool)
            .await
            .unwrap();

        update_grade_for_faculty(&pool, submission_id, fx.faculty_id, "A", "Good")
            .await
            .unwrap();

        let graded = get_for_faculty(&pool, submission_id, fx.faculty_id)
            .await
            .unwrap()
            .expect("owner can read the submission");
        assert_eq!(graded.answer, "my answer");
        assert_eq!(graded.grade.as_deref(), Some("A"));
        assert_eq!(graded.feedback.as_deref(), Some("Good"));

        let listed = list_for_faculty(&pool, fx.faculty_id).await.unwrap();
        assert_eq!(listed[0].grade.as_deref(), Some("A"));
    }

    #[tokio::test]
    async fn grading_someone_elses_course_is_unauthorized() {
        let pool = test_pool().await;
        let fx = seed(&pool).await;

        user_service::create_user(&pool, "intruder", "pw", Role::Faculty)
            .await
            .unwrap();
        let other_faculty: i64 =
            sqlx::query_scalar("SELECT id FROM users WHERE username = 'intruder'")
                .fetch_one(&pool)
                .await
                .unwrap();

        create_submission(&pool, fx.assignment_id, fx.student_id, "my answer")
            .await
            .unwrap();
        let submission_id: i64 = sqlx::query_scalar("SELECT id FROM submissions")
            .fetch_one(&pool)
            .await
            .unwrap();

        assert!(get_for_faculty(&pool, submission_id, other_faculty)
            .await
            .unwrap()
            .is_none());

        let err = update_grade_for_faculty(&pool, submission_id, other_faculty, "F", "mine now")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Unauthorized));

        // The row is untouched.
        let grade: Option<String> =
            sqlx::query_scalar("SELECT grade FROM submissions WHERE id = ?1")
                .bind(submission_id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(grade, None);
    }
}
