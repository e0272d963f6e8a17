//! Common types used across the application.

pub mod id;
pub mod yen;

pub use id::*;
pub use yen::Yen;
