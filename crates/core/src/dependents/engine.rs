//! Per-sub-record requirement state machines.
//!
//! Each spouse or other-dependent sub-record owns one `DependentFormState`.
//! Every transition re-derives the full requirement set through the rule
//! table; nothing is patched incrementally, so a stale required flag from a
//! previous change type cannot survive a transition.

use std::collections::HashMap;

use roumu_shared::types::DependentId;

use crate::dependents::error::DependentRuleError;
use crate::dependents::rules::required_fields;
use crate::dependents::types::{
    ChangeType, EndReason, FieldRequirements, FilingContext, FormTarget, FormVariant,
    IdentitySnapshot, RuleInput,
};

/// Requirement state machine for a single sub-record.
///
/// States are the `ChangeType` values; transitions are the user
/// re-selecting the change type. Any state is reachable from any other
/// and there is no terminal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependentFormState {
    variant: FormVariant,
    profile: IdentitySnapshot,
    input: RuleInput,
    before_snapshot: Option<IdentitySnapshot>,
    requirements: FieldRequirements,
}

impl DependentFormState {
    /// Creates a fresh state in `NoChange` with everything optional.
    ///
    /// `profile` holds the stored identity values; they seed the frozen
    /// before-snapshot when the record enters the `Change` state.
    #[must_use]
    pub fn new(variant: FormVariant, profile: IdentitySnapshot) -> Self {
        let input = RuleInput::default();
        let requirements = required_fields(&input, variant);
        Self {
            variant,
            profile,
            input,
            before_snapshot: None,
            requirements,
        }
    }

    /// The variant this sub-record belongs to.
    #[must_use]
    pub const fn variant(&self) -> FormVariant {
        self.variant
    }

    /// The currently active change type.
    #[must_use]
    pub const fn change_type(&self) -> ChangeType {
        self.input.change_type
    }

    /// The requirement set derived by the latest transition.
    #[must_use]
    pub const fn requirements(&self) -> &FieldRequirements {
        &self.requirements
    }

    /// The frozen before-values, present only in the `Change` state.
    #[must_use]
    pub const fn before_snapshot(&self) -> Option<&IdentitySnapshot> {
        self.before_snapshot.as_ref()
    }

    /// Selects a change type and re-derives the requirement set.
    ///
    /// Entering `Change` captures the before-snapshot from the stored
    /// profile; leaving `Change` discards this sub-record's snapshot and
    /// nothing else. Re-selecting the active state is a no-op transition
    /// that yields the identical requirement set.
    pub fn select_change_type(&mut self, change_type: ChangeType) -> &FieldRequirements {
        match (self.input.change_type, change_type) {
            (ChangeType::Change, ChangeType::Change) => {}
            (_, ChangeType::Change) => {
                self.before_snapshot = Some(self.profile.clone());
            }
            (_, _) => {
                self.before_snapshot = None;
            }
        }
        self.input.change_type = change_type;
        self.recompute()
    }

    /// Sets or clears the end reason and re-derives the requirement set.
    pub fn set_end_reason(&mut self, end_reason: Option<EndReason>) -> &FieldRequirements {
        self.input.end_reason = end_reason;
        self.recompute()
    }

    /// Sets the "has a non-dependent spouse" flag and re-derives.
    ///
    /// The flag only changes the outcome on the external spouse form; the
    /// rule table ignores it everywhere else.
    pub fn set_non_dependent_spouse(&mut self, flag: bool) -> &FieldRequirements {
        self.input.has_non_dependent_spouse = flag;
        self.recompute()
    }

    fn recompute(&mut self) -> &FieldRequirements {
        self.requirements = required_fields(&self.input, self.variant);
        &self.requirements
    }
}

/// Owns the requirement states of every sub-record in one filing.
///
/// Sub-records are independent: a transition on one never touches a
/// sibling's requirements or before-snapshot.
#[derive(Debug, Clone)]
pub struct DependentValidationEngine {
    context: FilingContext,
    spouse: Option<DependentFormState>,
    dependents: HashMap<DependentId, DependentFormState>,
}

impl DependentValidationEngine {
    /// Creates an engine for the given filing context.
    #[must_use]
    pub fn new(context: FilingContext) -> Self {
        Self {
            context,
            spouse: None,
            dependents: HashMap::new(),
        }
    }

    /// The filing context every sub-record of this engine shares.
    #[must_use]
    pub const fn context(&self) -> FilingContext {
        self.context
    }

    /// Registers the spouse sub-record, replacing any previous one.
    pub fn register_spouse(&mut self, profile: IdentitySnapshot) {
        let variant = FormVariant::new(FormTarget::Spouse, self.context);
        self.spouse = Some(DependentFormState::new(variant, profile));
    }

    /// Registers an other-dependent sub-record under its ID, replacing any
    /// previous state held for that ID.
    pub fn register_dependent(&mut self, id: DependentId, profile: IdentitySnapshot) {
        let variant = FormVariant::new(FormTarget::OtherDependent, self.context);
        self.dependents
            .insert(id, DependentFormState::new(variant, profile));
    }

    /// The spouse sub-record.
    pub fn spouse(&self) -> Result<&DependentFormState, DependentRuleError> {
        self.spouse.as_ref().ok_or(DependentRuleError::NoSpouseRecord)
    }

    /// The spouse sub-record, mutably.
    pub fn spouse_mut(&mut self) -> Result<&mut DependentFormState, DependentRuleError> {
        self.spouse.as_mut().ok_or(DependentRuleError::NoSpouseRecord)
    }

    /// The sub-record registered under `id`.
    pub fn dependent(&self, id: DependentId) -> Result<&DependentFormState, DependentRuleError> {
        self.dependents
            .get(&id)
            .ok_or(DependentRuleError::UnknownDependent(id))
    }

    /// The sub-record registered under `id`, mutably.
    pub fn dependent_mut(
        &mut self,
        id: DependentId,
    ) -> Result<&mut DependentFormState, DependentRuleError> {
        self.dependents
            .get_mut(&id)
            .ok_or(DependentRuleError::UnknownDependent(id))
    }

    /// Returns true if every registered sub-record's requirement set is
    /// currently empty.
    #[must_use]
    pub fn all_requirements_empty(&self) -> bool {
        self.spouse
            .iter()
            .chain(self.dependents.values())
            .all(|state| state.requirements().is_empty())
    }
}
