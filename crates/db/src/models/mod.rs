//! Domain model structs and DTOs.
//!
//! The cafe module contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - An explicit public projection that omits the internal id
//! - A create DTO for inserts and the form-submission DTO with its
//!   enumerated amenity choices

pub mod cafe;
