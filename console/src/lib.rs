//! Administrative console client for the field-service inventory backend
//!
//! The crate mirrors the screens of the browser console as workflow
//! controllers: each dialog (location selector, location assignment, stock
//! mutation, report material picker, movement form) is a struct holding
//! explicit state, validated client-side before any request is sent. All
//! backend interaction goes through the typed REST client in [`api`]; the
//! arithmetic that keeps total, allocated and available stock consistent
//! lives in the `shared` crate and is recomputed from a fresh fetch after
//! every mutation.

pub mod api;
pub mod config;
pub mod error;
pub mod workflows;

pub use config::Config;
pub use error::{AppError, AppResult};
