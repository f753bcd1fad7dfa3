//! Infrastructure layer for external integrations.
//!
//! This layer implements interfaces defined by the domain layer, providing
//! concrete implementations on top of PostgreSQL.
//!
//! # Modules
//!
//! - [`database`] - Single-session connection setup and database creation
//! - [`bootstrap`] - Embedded migrations and best-effort script execution
//! - [`persistence`] - PostgreSQL repository implementations

pub mod bootstrap;
pub mod database;
pub mod persistence;
