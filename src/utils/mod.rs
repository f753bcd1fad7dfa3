//! Utility functions shared across layers.
//!
//! - [`validation`] - Field checks used by the services before any
//!   data-access call
//! - [`db_error`] - Helpers for classifying database errors

pub mod db_error;
pub mod validation;
