//! Business logic services for the application layer.

pub mod core_course_service;
pub mod course_service;
pub mod graduation_requirement_service;
pub mod report_service;
pub mod score_service;
pub mod student_service;

pub use core_course_service::CoreCourseService;
pub use course_service::CourseService;
pub use graduation_requirement_service::GraduationRequirementService;
pub use report_service::ReportService;
pub use score_service::ScoreService;
pub use student_service::StudentService;
