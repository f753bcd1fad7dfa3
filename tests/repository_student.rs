mod common;

use academic_records::AppError;
use academic_records::domain::entities::{NewStudent, UpdateStudent};
use academic_records::domain::repositories::{ScoreRepository, StudentRepository};
use academic_records::infrastructure::persistence::{PgScoreRepository, PgStudentRepository};
use common::{create_test_course, create_test_score, create_test_student};
use sqlx::PgPool;
use std::sync::Arc;

fn new_student(id: &str) -> NewStudent {
    NewStudent {
        id: id.to_string(),
        name: "Alice".to_string(),
        department: "CS".to_string(),
        enrollment_year: 2023,
    }
}

#[sqlx::test]
async fn test_create_student(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));

    let student = repo.create(new_student("S001")).await.unwrap();

    assert_eq!(student.id, "S001");
    assert_eq!(student.name, "Alice");
    assert_eq!(student.enrollment_year, 2023);
}

#[sqlx::test]
async fn test_create_duplicate_student(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));
    repo.create(new_student("S001")).await.unwrap();

    let result = repo.create(new_student("S001")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_find_by_id(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));
    repo.create(new_student("S001")).await.unwrap();

    assert!(repo.find_by_id("S001").await.unwrap().is_some());
    assert!(repo.find_by_id("S404").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_students_ordered_by_id(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));
    for id in ["S003", "S001", "S002"] {
        repo.create(new_student(id)).await.unwrap();
    }

    let ids: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.id)
        .collect();

    assert_eq!(ids, vec!["S001", "S002", "S003"]);
}

#[sqlx::test]
async fn test_update_student_keeps_id(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));
    repo.create(new_student("S001")).await.unwrap();

    let update = UpdateStudent {
        name: "Alice Smith".to_string(),
        department: "Math".to_string(),
        enrollment_year: 2022,
    };
    let updated = repo.update("S001", update).await.unwrap();

    assert_eq!(updated.id, "S001");
    assert_eq!(updated.name, "Alice Smith");
    assert_eq!(updated.department, "Math");

    let stored = repo.find_by_id("S001").await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[sqlx::test]
async fn test_update_missing_student(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));

    let update = UpdateStudent {
        name: "Nobody".to_string(),
        department: "CS".to_string(),
        enrollment_year: 2022,
    };
    let result = repo.update("S404", update).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_delete_student_cascades_to_scores(pool: PgPool) {
    let pool = Arc::new(pool);
    let students = PgStudentRepository::new(pool.clone());
    let scores = PgScoreRepository::new(pool.clone());

    create_test_student(&pool, "S001", "Alice", "CS").await;
    create_test_student(&pool, "S002", "Bob", "CS").await;
    create_test_course(&pool, "C101", 3.0, "core").await;
    create_test_course(&pool, "C102", 2.0, "general").await;
    create_test_score(&pool, "S001", "C101", "2024-1", 85.0).await;
    create_test_score(&pool, "S001", "C102", "2024-1", 40.0).await;
    create_test_score(&pool, "S002", "C101", "2024-1", 70.0).await;

    students.delete("S001").await.unwrap();

    assert!(scores.list_for_student("S001").await.unwrap().is_empty());
    assert_eq!(scores.list_for_student("S002").await.unwrap().len(), 1);
    assert!(students.find_by_id("S001").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_delete_missing_student(pool: PgPool) {
    let repo = PgStudentRepository::new(Arc::new(pool));

    let result = repo.delete("S404").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_list_summaries(pool: PgPool) {
    let pool = Arc::new(pool);
    let repo = PgStudentRepository::new(pool.clone());

    create_test_student(&pool, "S001", "Alice", "CS").await;
    create_test_student(&pool, "S002", "Bob", "CS").await;
    create_test_course(&pool, "C101", 3.0, "core").await;
    create_test_course(&pool, "C102", 1.0, "elective").await;
    // 3.0 credits at 4.0 and 1.0 credit at 0.0 -> (12 + 0) / 4 = 3.0
    create_test_score(&pool, "S001", "C101", "2024-1", 95.0).await;
    create_test_score(&pool, "S001", "C102", "2024-1", 30.0).await;

    let summaries = repo.list_summaries().await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, "S001");
    assert_eq!(summaries[0].credits_earned, 3.0);
    assert_eq!(summaries[0].average_grade_point, Some(3.0));
    assert_eq!(summaries[1].credits_earned, 0.0);
    assert_eq!(summaries[1].average_grade_point, None);
}
