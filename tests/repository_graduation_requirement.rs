mod common;

use academic_records::AppError;
use academic_records::domain::entities::{NewGraduationRequirement, UpdateGraduationRequirement};
use academic_records::domain::repositories::GraduationRequirementRepository;
use academic_records::infrastructure::persistence::PgGraduationRequirementRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn requirement(department: &str) -> NewGraduationRequirement {
    NewGraduationRequirement {
        department: department.to_string(),
        total_credits_required: 160.0,
        max_core_failures: 1,
        min_gpa: 2.0,
    }
}

#[sqlx::test]
async fn test_create_and_find_requirement(pool: PgPool) {
    let repo = PgGraduationRequirementRepository::new(Arc::new(pool));

    let created = repo.create(requirement("CS")).await.unwrap();
    let found = repo.find_by_department("CS").await.unwrap().unwrap();

    assert_eq!(created, found);
    assert_eq!(found.max_core_failures, 1);
}

#[sqlx::test]
async fn test_one_requirement_per_department(pool: PgPool) {
    let repo = PgGraduationRequirementRepository::new(Arc::new(pool));
    repo.create(requirement("CS")).await.unwrap();

    let result = repo.create(requirement("CS")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    assert_eq!(repo.list().await.unwrap().len(), 1);
}

#[sqlx::test]
async fn test_update_requirement(pool: PgPool) {
    let repo = PgGraduationRequirementRepository::new(Arc::new(pool));
    repo.create(requirement("CS")).await.unwrap();

    let updated = repo
        .update(
            "CS",
            UpdateGraduationRequirement {
                total_credits_required: 150.0,
                max_core_failures: 0,
                min_gpa: 2.5,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.department, "CS");
    assert_eq!(updated.total_credits_required, 150.0);
    assert_eq!(updated.max_core_failures, 0);
    assert_eq!(updated.min_gpa, 2.5);
}

#[sqlx::test]
async fn test_delete_requirement(pool: PgPool) {
    let repo = PgGraduationRequirementRepository::new(Arc::new(pool));
    repo.create(requirement("CS")).await.unwrap();
    repo.create(requirement("Math")).await.unwrap();

    repo.delete("CS").await.unwrap();

    let remaining: Vec<String> = repo
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.department)
        .collect();
    assert_eq!(remaining, vec!["Math"]);

    assert!(matches!(
        repo.delete("CS").await.unwrap_err(),
        AppError::NotFound { .. }
    ));
}
