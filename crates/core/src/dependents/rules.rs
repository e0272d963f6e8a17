//! The parameterized rule table.
//!
//! One table, indexed by `FormVariant`, covers all four form flavors
//! (spouse/other-dependent x internal/external). The derivation is a pure
//! function of the rule input; the caller replaces its previous
//! requirement set wholesale with the returned one.

use crate::dependents::types::{
    ChangeType, EndReason, Field, FieldPath, FieldRequirements, FilingContext, FormTarget,
    FormVariant, RuleInput,
};

/// Identity fields required whenever the record must name its subject.
const IDENTITY: [Field; 6] = [
    Field::LastName,
    Field::FirstName,
    Field::LastNameKana,
    Field::FirstNameKana,
    Field::BirthDate,
    Field::Gender,
];

/// Derives the required-field set for one sub-record.
///
/// Base rules per change type:
/// - `NoChange`: everything optional; an almost-empty record is allowed.
/// - `Applicable`: identity fields required; end fields stay optional.
/// - `NotApplicable`: identity fields required (the record still names who
///   is leaving dependent status); start fields optional; an end reason of
///   death additionally requires the death date.
/// - `Change`: current identity fields optional - they are frozen
///   before-values sourced from existing data. The after block carries no
///   hard requirement; the user fills in what changed.
///
/// Variant deltas:
/// - Other-dependent forms also require the relationship field wherever
///   identity is required; the spouse form's relationship is implicit.
/// - The external filing requires address and income under `Applicable`.
/// - On the external spouse form only, the "has a non-dependent spouse"
///   flag overrides everything: the income field becomes the single
///   required field regardless of change type.
#[must_use]
pub fn required_fields(input: &RuleInput, variant: FormVariant) -> FieldRequirements {
    let mut requirements = FieldRequirements::empty();

    if input.has_non_dependent_spouse
        && variant.target == FormTarget::Spouse
        && variant.context == FilingContext::External
    {
        requirements.require(FieldPath::Current(Field::Income));
        return requirements;
    }

    match input.change_type {
        ChangeType::NoChange => {}
        ChangeType::Applicable => {
            require_identity(&mut requirements, variant);
            if variant.context == FilingContext::External {
                requirements.require(FieldPath::Current(Field::Address));
                requirements.require(FieldPath::Current(Field::Income));
            }
        }
        ChangeType::NotApplicable => {
            require_identity(&mut requirements, variant);
            if input.end_reason == Some(EndReason::Death) {
                requirements.require(FieldPath::Current(Field::DeathDate));
            }
        }
        ChangeType::Change => {
            // Current identity is frozen; the after block stays optional.
        }
    }

    requirements
}

fn require_identity(requirements: &mut FieldRequirements, variant: FormVariant) {
    for field in IDENTITY {
        requirements.require(FieldPath::Current(field));
    }
    if variant.target == FormTarget::OtherDependent {
        requirements.require(FieldPath::Current(Field::Relationship));
    }
}
