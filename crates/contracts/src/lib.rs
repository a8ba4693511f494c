//! Shared types for the stores administration front-end.
//!
//! Browser-free: entity schemas, backend API contracts and the generic
//! table engine live here so they can be unit tested natively.

pub mod domain;
pub mod shared;
