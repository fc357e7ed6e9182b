//! Shared types and models for the field-service inventory console
//!
//! This crate contains the domain models mirroring the REST backend's JSON
//! shapes, the wire enums, and the pure stock-arithmetic helpers used by the
//! console workflows.

pub mod models;
pub mod types;
pub mod validation;

pub use models::*;
pub use types::*;
pub use validation::*;
