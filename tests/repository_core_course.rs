mod common;

use academic_records::AppError;
use academic_records::application::services::CoreCourseService;
use academic_records::domain::entities::CoreCourse;
use academic_records::domain::repositories::CoreCourseRepository;
use academic_records::infrastructure::persistence::PgCoreCourseRepository;
use common::create_test_course;
use sqlx::PgPool;
use std::sync::Arc;

async fn seed(pool: &PgPool) {
    create_test_course(pool, "C101", 3.0, "core").await;
    create_test_course(pool, "C102", 3.0, "core").await;
}

#[sqlx::test]
async fn test_duplicate_core_course_leaves_state_unchanged(pool: PgPool) {
    seed(&pool).await;
    let repo = Arc::new(PgCoreCourseRepository::new(Arc::new(pool)));
    let service = CoreCourseService::new(repo.clone());

    service
        .add_core_course(CoreCourse::new("CS", "C101"))
        .await
        .unwrap();
    let before = repo.list(None).await.unwrap();

    let result = service.add_core_course(CoreCourse::new("CS", "C101")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert_eq!(repo.list(None).await.unwrap(), before);
}

#[sqlx::test]
async fn test_primary_key_rejects_duplicate(pool: PgPool) {
    seed(&pool).await;
    let repo = PgCoreCourseRepository::new(Arc::new(pool));
    repo.create(CoreCourse::new("CS", "C101")).await.unwrap();

    let result = repo.create(CoreCourse::new("CS", "C101")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_unknown_course_is_conflict(pool: PgPool) {
    seed(&pool).await;
    let repo = PgCoreCourseRepository::new(Arc::new(pool));

    let result = repo.create(CoreCourse::new("CS", "C999")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_same_course_core_for_two_departments(pool: PgPool) {
    seed(&pool).await;
    let repo = PgCoreCourseRepository::new(Arc::new(pool));

    repo.create(CoreCourse::new("CS", "C101")).await.unwrap();
    repo.create(CoreCourse::new("Math", "C101")).await.unwrap();
    repo.create(CoreCourse::new("CS", "C102")).await.unwrap();

    assert_eq!(repo.list(None).await.unwrap().len(), 3);
    assert_eq!(
        repo.list(Some("CS".to_string())).await.unwrap(),
        vec![CoreCourse::new("CS", "C101"), CoreCourse::new("CS", "C102")]
    );
    assert!(repo.exists(&CoreCourse::new("Math", "C101")).await.unwrap());
    assert!(!repo.exists(&CoreCourse::new("Math", "C102")).await.unwrap());
}

#[sqlx::test]
async fn test_delete_core_course(pool: PgPool) {
    seed(&pool).await;
    let repo = PgCoreCourseRepository::new(Arc::new(pool));
    repo.create(CoreCourse::new("CS", "C101")).await.unwrap();

    repo.delete(&CoreCourse::new("CS", "C101")).await.unwrap();

    assert!(repo.list(None).await.unwrap().is_empty());
    assert!(matches!(
        repo.delete(&CoreCourse::new("CS", "C101")).await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}
