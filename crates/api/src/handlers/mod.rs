//! Request handlers.
//!
//! `cafes` covers the machine-facing API surface (query and mutation
//! services); `submissions` covers the human browsing and form flow.
//! Handlers delegate to [`cafedex_db::repositories::CafeRepo`] and map
//! outcomes via [`crate::error::AppError`].

pub mod cafes;
pub mod submissions;
