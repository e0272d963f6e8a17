//! Domain types for dependent field requirements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::dependents::error::DependentRuleError;

/// The declared status of a dependent sub-record within a filing.
///
/// Exactly one change type is active per sub-record at a time. Switching
/// it re-derives the required-field set from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    /// Nothing about this person changes; an almost-empty record is allowed.
    NoChange,
    /// The person becomes a dependent.
    Applicable,
    /// The person ceases to be a dependent.
    NotApplicable,
    /// The person's recorded details change.
    Change,
}

impl ChangeType {
    /// Returns the string representation of the change type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoChange => "no_change",
            Self::Applicable => "applicable",
            Self::NotApplicable => "not_applicable",
            Self::Change => "change",
        }
    }

    /// Parses a change type from a raw form tag.
    ///
    /// # Errors
    ///
    /// Returns `DependentRuleError::InvalidChangeType` for an unrecognized
    /// tag. This is a programming error in the calling layer; it must fail
    /// loudly rather than default to all-optional.
    pub fn parse(s: &str) -> Result<Self, DependentRuleError> {
        match s {
            "no_change" => Ok(Self::NoChange),
            "applicable" => Ok(Self::Applicable),
            "not_applicable" => Ok(Self::NotApplicable),
            "change" => Ok(Self::Change),
            other => Err(DependentRuleError::InvalidChangeType(other.to_string())),
        }
    }
}

impl fmt::Display for ChangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Why a person ceased to be a dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// The dependent died; the filing must carry the date of death.
    Death,
    /// Divorce from the insured person.
    Divorce,
    /// The dependent took up covered employment of their own.
    Employment,
    /// The dependent's income exceeded the eligibility ceiling.
    IncomeExceeded,
    /// Any other reason, described free-form on the filing.
    Other,
}

impl EndReason {
    /// Returns the string representation of the end reason.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Death => "death",
            Self::Divorce => "divorce",
            Self::Employment => "employment",
            Self::IncomeExceeded => "income_exceeded",
            Self::Other => "other",
        }
    }

    /// Parses an end reason from a string.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "death" => Some(Self::Death),
            "divorce" => Some(Self::Divorce),
            "employment" => Some(Self::Employment),
            "income_exceeded" => Some(Self::IncomeExceeded),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Whether the sub-record describes the spouse or another dependent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormTarget {
    /// The insured person's spouse. Relationship is implicit.
    Spouse,
    /// Any other dependent; the relationship must be stated.
    OtherDependent,
}

/// Which filing the form feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingContext {
    /// The organization's internal record update.
    Internal,
    /// The filing submitted to the pension office.
    External,
}

/// A (target, context) pair selecting one column of the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormVariant {
    /// Spouse or other dependent.
    pub target: FormTarget,
    /// Internal or external filing.
    pub context: FilingContext,
}

impl FormVariant {
    /// Creates a variant.
    #[must_use]
    pub const fn new(target: FormTarget, context: FilingContext) -> Self {
        Self { target, context }
    }
}

/// A single input field of a dependent sub-record.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Family name.
    LastName,
    /// Given name.
    FirstName,
    /// Family name reading (kana).
    LastNameKana,
    /// Given name reading (kana).
    FirstNameKana,
    /// Date of birth.
    BirthDate,
    /// Gender as recorded on the filing.
    Gender,
    /// Relationship to the insured person.
    Relationship,
    /// Residential address.
    Address,
    /// Annual income.
    Income,
    /// Occupation.
    Occupation,
    /// Date dependency started.
    StartDate,
    /// Reason dependency started.
    StartReason,
    /// Date dependency ended.
    EndDate,
    /// Reason dependency ended.
    EndReason,
    /// Date of death, when the end reason is death.
    DeathDate,
}

/// A field location within the sub-record.
///
/// The `Change` state exposes a nested "after" block for the new values
/// alongside the frozen current ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldPath {
    /// A field of the current record.
    Current(Field),
    /// A field of the "after" block shown in the `Change` state.
    After(Field),
}

/// Whether a field currently blocks submission when left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// The field must be filled before the filing can be submitted.
    Required,
    /// The field may be left empty.
    Optional,
}

/// The derived required-field set for one sub-record.
///
/// A value type: derivations are compared wholesale, never patched
/// incrementally. Any path not marked required is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRequirements {
    required: BTreeSet<FieldPath>,
}

impl FieldRequirements {
    /// An empty set: every field optional.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Marks a field as required.
    pub fn require(&mut self, path: FieldPath) {
        self.required.insert(path);
    }

    /// Returns the requirement for a field.
    #[must_use]
    pub fn requirement(&self, path: FieldPath) -> Requirement {
        if self.required.contains(&path) {
            Requirement::Required
        } else {
            Requirement::Optional
        }
    }

    /// Returns true if the field is required.
    #[must_use]
    pub fn is_required(&self, path: FieldPath) -> bool {
        self.required.contains(&path)
    }

    /// Iterates over the required field paths in stable order.
    pub fn required_paths(&self) -> impl Iterator<Item = FieldPath> + '_ {
        self.required.iter().copied()
    }

    /// Returns true if no field is required.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.required.is_empty()
    }

    /// Number of required fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.required.len()
    }
}

/// Everything the rule table needs to derive one sub-record's requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInput {
    /// The active change type.
    pub change_type: ChangeType,
    /// The selected end reason, when the change type is `NotApplicable`.
    pub end_reason: Option<EndReason>,
    /// The "has a non-dependent spouse" flag (spouse form, external filing).
    pub has_non_dependent_spouse: bool,
}

impl Default for RuleInput {
    fn default() -> Self {
        Self {
            change_type: ChangeType::NoChange,
            end_reason: None,
            has_non_dependent_spouse: false,
        }
    }
}

/// Frozen identity values captured when a sub-record enters the `Change`
/// state. These are the read-only "before" values; the user edits the
/// nested after block instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentitySnapshot {
    /// Family name on record.
    pub last_name: Option<String>,
    /// Given name on record.
    pub first_name: Option<String>,
    /// Family name reading on record.
    pub last_name_kana: Option<String>,
    /// Given name reading on record.
    pub first_name_kana: Option<String>,
    /// Date of birth on record.
    pub birth_date: Option<NaiveDate>,
    /// Relationship on record.
    pub relationship: Option<String>,
}
