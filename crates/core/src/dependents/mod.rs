//! Conditional field requirements for dependent/spouse filings.
//!
//! A dependent sub-record carries a change type (no change / becoming a
//! dependent / ceasing to be one / details changed) that decides which of
//! its sibling fields are currently mandatory. This module implements:
//! - The change-type and field vocabulary
//! - One parameterized rule table covering spouse/other-dependent records
//!   in both internal and external filings
//! - A per-sub-record state machine that re-derives the required-field
//!   set from scratch on every transition
//! - Error types for unrecognized tags and unregistered sub-records

pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

#[cfg(test)]
mod rules_props;

pub use engine::{DependentFormState, DependentValidationEngine};
pub use error::DependentRuleError;
pub use rules::required_fields;
pub use types::{
    ChangeType, EndReason, Field, FieldPath, FieldRequirements, FilingContext, FormTarget,
    FormVariant, IdentitySnapshot, Requirement, RuleInput,
};
