//! Shared domain types and the error taxonomy for the cafe directory.

pub mod error;
pub mod types;
