//! Shared types and errors for Roumu.
//!
//! This crate provides common types used across all other crates:
//! - An integer yen money type for statutory amounts
//! - Typed IDs for type-safe entity references
//! - Application-wide error types

pub mod error;
pub mod types;

pub use error::{AppError, AppResult};
