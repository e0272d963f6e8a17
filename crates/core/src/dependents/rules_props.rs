//! Property-based tests for the dependent rule table and state machine.

use proptest::prelude::*;

use crate::dependents::engine::DependentFormState;
use crate::dependents::rules::required_fields;
use crate::dependents::types::{
    ChangeType, EndReason, Field, FieldPath, FilingContext, FormTarget, FormVariant,
    IdentitySnapshot, RuleInput,
};

fn arb_change_type() -> impl Strategy<Value = ChangeType> {
    prop_oneof![
        Just(ChangeType::NoChange),
        Just(ChangeType::Applicable),
        Just(ChangeType::NotApplicable),
        Just(ChangeType::Change),
    ]
}

fn arb_end_reason() -> impl Strategy<Value = Option<EndReason>> {
    prop_oneof![
        Just(None),
        Just(Some(EndReason::Death)),
        Just(Some(EndReason::Divorce)),
        Just(Some(EndReason::Employment)),
        Just(Some(EndReason::IncomeExceeded)),
        Just(Some(EndReason::Other)),
    ]
}

fn arb_variant() -> impl Strategy<Value = FormVariant> {
    let targets = prop_oneof![Just(FormTarget::Spouse), Just(FormTarget::OtherDependent)];
    let contexts = prop_oneof![Just(FilingContext::Internal), Just(FilingContext::External)];
    (targets, contexts).prop_map(|(target, context)| FormVariant::new(target, context))
}

fn arb_input() -> impl Strategy<Value = RuleInput> {
    (arb_change_type(), arb_end_reason(), any::<bool>()).prop_map(
        |(change_type, end_reason, has_non_dependent_spouse)| RuleInput {
            change_type,
            end_reason,
            has_non_dependent_spouse,
        },
    )
}

proptest! {
    /// The derivation is a pure function: same input, same output.
    #[test]
    fn prop_derivation_deterministic(input in arb_input(), variant in arb_variant()) {
        prop_assert_eq!(
            required_fields(&input, variant),
            required_fields(&input, variant)
        );
    }

    /// The after block never carries a requirement.
    #[test]
    fn prop_after_block_never_required(input in arb_input(), variant in arb_variant()) {
        let reqs = required_fields(&input, variant);
        prop_assert!(reqs
            .required_paths()
            .all(|path| !matches!(path, FieldPath::After(_))));
    }

    /// Without the spouse override, NoChange and Change require nothing.
    #[test]
    fn prop_no_change_and_change_require_nothing(
        end_reason in arb_end_reason(),
        variant in arb_variant(),
        change_type in prop_oneof![Just(ChangeType::NoChange), Just(ChangeType::Change)],
    ) {
        let input = RuleInput {
            change_type,
            end_reason,
            has_non_dependent_spouse: false,
        };
        prop_assert!(required_fields(&input, variant).is_empty());
    }

    /// The death date is required exactly for NotApplicable + Death
    /// (absent the spouse override).
    #[test]
    fn prop_death_date_rule(input in arb_input(), variant in arb_variant()) {
        let reqs = required_fields(&input, variant);
        let overridden = input.has_non_dependent_spouse
            && variant.target == FormTarget::Spouse
            && variant.context == FilingContext::External;
        let expected = !overridden
            && input.change_type == ChangeType::NotApplicable
            && input.end_reason == Some(EndReason::Death);
        prop_assert_eq!(
            reqs.is_required(FieldPath::Current(Field::DeathDate)),
            expected
        );
    }

    /// After any sequence of transitions, the state machine's requirement
    /// set equals a fresh derivation from its final input - transitions
    /// replace, never accumulate.
    #[test]
    fn prop_transitions_leave_no_residue(
        variant in arb_variant(),
        steps in prop::collection::vec((arb_change_type(), arb_end_reason(), any::<bool>()), 1..12),
    ) {
        let mut state = DependentFormState::new(variant, IdentitySnapshot::default());
        for (change_type, end_reason, flag) in &steps {
            state.select_change_type(*change_type);
            state.set_end_reason(*end_reason);
            state.set_non_dependent_spouse(*flag);
        }
        let (change_type, end_reason, flag) = steps[steps.len() - 1];
        let expected = required_fields(
            &RuleInput {
                change_type,
                end_reason,
                has_non_dependent_spouse: flag,
            },
            variant,
        );
        prop_assert_eq!(state.requirements(), &expected);
    }

    /// The before-snapshot exists exactly while the state is Change.
    #[test]
    fn prop_snapshot_tracks_change_state(
        variant in arb_variant(),
        steps in prop::collection::vec(arb_change_type(), 1..12),
    ) {
        let profile = IdentitySnapshot {
            last_name: Some("Tanaka".to_string()),
            ..IdentitySnapshot::default()
        };
        let mut state = DependentFormState::new(variant, profile);
        for change_type in steps {
            state.select_change_type(change_type);
            prop_assert_eq!(
                state.before_snapshot().is_some(),
                change_type == ChangeType::Change
            );
        }
    }
}
