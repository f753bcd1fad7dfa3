//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and
//! provide a clean API for the presentation panels.
//!
//! # Available Services
//!
//! - [`services::StudentService`] - Student records
//! - [`services::CourseService`] - Courses and credits
//! - [`services::ScoreService`] - Scores with range checks
//! - [`services::GraduationRequirementService`] - Per-department requirements
//! - [`services::CoreCourseService`] - Core-course designations
//! - [`services::ReportService`] - Warning list, rankings and statistics

pub mod services;
