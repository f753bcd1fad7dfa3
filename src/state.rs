//! Explicit application context.
//!
//! The session pool and the services built on it are created once and passed
//! to every panel; nothing is held in a global.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{
    CoreCourseService, CourseService, GraduationRequirementService, ReportService, ScoreService,
    StudentService,
};
use crate::infrastructure::persistence::{
    PgCoreCourseRepository, PgCourseRepository, PgGraduationRequirementRepository,
    PgReportRepository, PgScoreRepository, PgStudentRepository,
};

/// Services wired to the single database session.
#[derive(Clone)]
pub struct AppContext {
    pub pool: Arc<PgPool>,
    pub students: Arc<StudentService<PgStudentRepository>>,
    pub courses: Arc<CourseService<PgCourseRepository>>,
    pub scores: Arc<ScoreService<PgScoreRepository>>,
    pub requirements: Arc<GraduationRequirementService<PgGraduationRequirementRepository>>,
    pub core_courses: Arc<CoreCourseService<PgCoreCourseRepository>>,
    pub reports: Arc<ReportService<PgReportRepository>>,
}

impl AppContext {
    pub fn new(pool: PgPool) -> Self {
        let pool = Arc::new(pool);

        Self {
            students: Arc::new(StudentService::new(Arc::new(PgStudentRepository::new(
                pool.clone(),
            )))),
            courses: Arc::new(CourseService::new(Arc::new(PgCourseRepository::new(
                pool.clone(),
            )))),
            scores: Arc::new(ScoreService::new(Arc::new(PgScoreRepository::new(
                pool.clone(),
            )))),
            requirements: Arc::new(GraduationRequirementService::new(Arc::new(
                PgGraduationRequirementRepository::new(pool.clone()),
            ))),
            core_courses: Arc::new(CoreCourseService::new(Arc::new(
                PgCoreCourseRepository::new(pool.clone()),
            ))),
            reports: Arc::new(ReportService::new(Arc::new(PgReportRepository::new(
                pool.clone(),
            )))),
            pool,
        }
    }
}
