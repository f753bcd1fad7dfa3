#![allow(dead_code)]

use sqlx::PgPool;

pub async fn create_test_student(pool: &PgPool, id: &str, name: &str, department: &str) {
    sqlx::query(
        "INSERT INTO students (id, name, department, enrollment_year) VALUES ($1, $2, $3, 2023)",
    )
    .bind(id)
    .bind(name)
    .bind(department)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_course(pool: &PgPool, id: &str, credit: f64, category: &str) {
    sqlx::query("INSERT INTO courses (id, name, credit, category) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(format!("Course {id}"))
        .bind(credit)
        .bind(category)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_score(
    pool: &PgPool,
    student_id: &str,
    course_id: &str,
    semester: &str,
    value: f64,
) {
    sqlx::query(
        "INSERT INTO scores (student_id, course_id, semester, score_value) VALUES ($1, $2, $3, $4)",
    )
    .bind(student_id)
    .bind(course_id)
    .bind(semester)
    .bind(value)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_requirement(
    pool: &PgPool,
    department: &str,
    credits: f64,
    max_core_failures: i32,
    min_gpa: f64,
) {
    sqlx::query(
        "INSERT INTO graduation_requirements (department, total_credits_required, max_core_failures, min_gpa)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(department)
    .bind(credits)
    .bind(max_core_failures)
    .bind(min_gpa)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_test_core_course(pool: &PgPool, department: &str, course_id: &str) {
    sqlx::query("INSERT INTO core_courses (department, course_id) VALUES ($1, $2)")
        .bind(department)
        .bind(course_id)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
