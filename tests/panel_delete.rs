mod common;

use academic_records::presentation::Session;
use academic_records::presentation::panels::core_course::CoreCourseAction;
use academic_records::presentation::panels::score::{ScoreAction, ScoreKeyArgs};
use academic_records::presentation::panels::student::StudentAction;
use academic_records::presentation::panels::{PanelCommand, dispatch};
use academic_records::presentation::prompt::Prompt;
use academic_records::presentation::render::OutputFormat;
use academic_records::{AppContext, AppError, Config};
use common::{
    count_rows, create_test_core_course, create_test_course, create_test_score,
    create_test_student,
};
use sqlx::PgPool;
use std::cell::Cell;
use std::rc::Rc;

/// Answers every confirmation with a fixed reply and counts the questions.
struct FixedAnswer {
    answer: bool,
    asked: Rc<Cell<usize>>,
}

impl Prompt for FixedAnswer {
    fn input(&self, label: &str, _initial: Option<String>) -> Result<String, AppError> {
        panic!("unexpected prompt for {label}");
    }

    fn confirm(&self, _question: &str) -> Result<bool, AppError> {
        self.asked.set(self.asked.get() + 1);
        Ok(self.answer)
    }
}

fn session(pool: PgPool, answer: bool) -> (Session, Rc<Cell<usize>>) {
    let asked = Rc::new(Cell::new(0));
    let config = Config {
        database_url: "postgres://test@localhost/test".to_string(),
        log_level: "warn".to_string(),
        log_format: "text".to_string(),
        db_connect_timeout: 10,
    };
    let prompt = FixedAnswer {
        answer,
        asked: asked.clone(),
    };
    let session = Session::new(
        AppContext::new(pool),
        config,
        OutputFormat::Json,
        Box::new(prompt),
    );
    (session, asked)
}

async fn seed(pool: &PgPool) {
    create_test_student(pool, "S001", "Alice", "CS").await;
    create_test_course(pool, "C101", 3.0, "core").await;
    create_test_score(pool, "S001", "C101", "2024-1", 45.0).await;
    create_test_core_course(pool, "CS", "C101").await;
}

fn score_key() -> ScoreKeyArgs {
    ScoreKeyArgs {
        student: Some("S001".to_string()),
        course: Some("C101".to_string()),
        semester: Some("2024-1".to_string()),
    }
}

#[sqlx::test]
async fn test_declined_student_delete_keeps_records(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), false);

    let command = PanelCommand::Student {
        action: StudentAction::Delete {
            id: "S001".to_string(),
            yes: false,
        },
    };
    dispatch(&session, command).await.unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(count_rows(&pool, "students").await, 1);
    assert_eq!(count_rows(&pool, "scores").await, 1);
}

#[sqlx::test]
async fn test_confirmed_student_delete_cascades(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), true);

    let command = PanelCommand::Student {
        action: StudentAction::Delete {
            id: "S001".to_string(),
            yes: false,
        },
    };
    dispatch(&session, command).await.unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(count_rows(&pool, "students").await, 0);
    assert_eq!(count_rows(&pool, "scores").await, 0);
}

#[sqlx::test]
async fn test_yes_flag_skips_the_question(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), false);

    let command = PanelCommand::Score {
        action: ScoreAction::Delete {
            key: score_key(),
            yes: true,
        },
    };
    dispatch(&session, command).await.unwrap();

    assert_eq!(asked.get(), 0);
    assert_eq!(count_rows(&pool, "scores").await, 0);
}

#[sqlx::test]
async fn test_declined_score_delete_keeps_score(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), false);

    let command = PanelCommand::Score {
        action: ScoreAction::Delete {
            key: score_key(),
            yes: false,
        },
    };
    dispatch(&session, command).await.unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(count_rows(&pool, "scores").await, 1);
}

#[sqlx::test]
async fn test_declined_core_course_delete_keeps_designation(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), false);

    let command = PanelCommand::CoreCourse {
        action: CoreCourseAction::Delete {
            department: Some("CS".to_string()),
            course: Some("C101".to_string()),
            yes: false,
        },
    };
    dispatch(&session, command).await.unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(count_rows(&pool, "core_courses").await, 1);
}

#[sqlx::test]
async fn test_missing_core_course_fails_before_asking(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), true);

    let command = PanelCommand::CoreCourse {
        action: CoreCourseAction::Delete {
            department: Some("CS".to_string()),
            course: Some("C999".to_string()),
            yes: false,
        },
    };
    let err = dispatch(&session, command).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(asked.get(), 0);
    assert_eq!(count_rows(&pool, "core_courses").await, 1);
}

#[sqlx::test]
async fn test_missing_student_fails_before_asking(pool: PgPool) {
    seed(&pool).await;
    let (session, asked) = session(pool.clone(), true);

    let command = PanelCommand::Student {
        action: StudentAction::Delete {
            id: "S404".to_string(),
            yes: false,
        },
    };
    let err = dispatch(&session, command).await.unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
    assert_eq!(asked.get(), 0);
}
