//! Core filing computations for Roumu.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, statutory rule tables, and calculations live here.
//!
//! # Modules
//!
//! - `calendar` - Conversion between Gregorian dates and the Japanese era calendar
//! - `remuneration` - Standard-remuneration averaging and bonus figures
//! - `dependents` - Conditional field requirements for dependent/spouse filings

pub mod calendar;
pub mod dependents;
pub mod remuneration;
