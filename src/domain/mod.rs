//! Domain layer containing academic entities and the data-access contract.
//!
//! The domain layer has no dependencies on infrastructure or presentation.
//!
//! # Architecture
//!
//! - [`entities`] - Students, courses, scores, requirements, core courses
//! - [`grading`] - Score to grade-point mapping and the pass predicate
//! - [`reports`] - Row types of the precomputed reports
//! - [`repositories`] - Data access trait definitions
//!
//! Derived figures (credits, GPA, warnings) are computed by the database;
//! only [`grading`] is mirrored on the client.

pub mod entities;
pub mod grading;
pub mod reports;
pub mod repositories;
