//! Core domain entities of the academic records model.
//!
//! Entities are plain data structures. Creation inputs (`New*`) and update
//! inputs (`Update*`) are separate types, and update inputs never carry key
//! fields: student id, course id, department and the score key are fixed
//! once a record exists.
//!
//! # Entity Types
//!
//! - [`Student`] / [`StudentSummary`]
//! - [`Course`] with [`CourseCategory`]
//! - [`Score`] keyed by [`ScoreKey`], listed as [`ScoreDetail`]
//! - [`GraduationRequirement`]
//! - [`CoreCourse`]

pub mod core_course;
pub mod course;
pub mod graduation_requirement;
pub mod score;
pub mod student;

pub use core_course::CoreCourse;
pub use course::{Course, CourseCategory, NewCourse, UnknownCategory, UpdateCourse};
pub use graduation_requirement::{
    GraduationRequirement, NewGraduationRequirement, UpdateGraduationRequirement,
};
pub use score::{NewScore, Score, ScoreDetail, ScoreKey};
pub use student::{NewStudent, Student, StudentSummary, UpdateStudent};
