//! Repository trait definitions for the domain layer.
//!
//! These traits are the data-access contract. Queries return vectors (empty
//! on no match) or options; mutations return the written record or `()` and
//! fail with a structured [`crate::error::AppError`]. Each mutation is a
//! single statement, so it either applies completely or not at all.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`StudentRepository`]
//! - [`CourseRepository`]
//! - [`ScoreRepository`]
//! - [`GraduationRequirementRepository`]
//! - [`CoreCourseRepository`]
//! - [`ReportRepository`]

pub mod core_course_repository;
pub mod course_repository;
pub mod graduation_requirement_repository;
pub mod report_repository;
pub mod score_repository;
pub mod student_repository;

pub use core_course_repository::CoreCourseRepository;
pub use course_repository::CourseRepository;
pub use graduation_requirement_repository::GraduationRequirementRepository;
pub use report_repository::ReportRepository;
pub use score_repository::ScoreRepository;
pub use student_repository::StudentRepository;

#[cfg(test)]
pub use core_course_repository::MockCoreCourseRepository;
#[cfg(test)]
pub use course_repository::MockCourseRepository;
#[cfg(test)]
pub use graduation_requirement_repository::MockGraduationRequirementRepository;
#[cfg(test)]
pub use report_repository::MockReportRepository;
#[cfg(test)]
pub use score_repository::MockScoreRepository;
#[cfg(test)]
pub use student_repository::MockStudentRepository;
