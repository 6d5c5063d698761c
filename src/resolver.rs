//! # Failure-Strategy Priority Merger
//!
//! Merges the failure-strategy rule lists declared at the three nesting scopes
//! into one action-per-category mapping. The walk is a single deterministic
//! pass, innermost scope first:
//!
//! ```text
//! ┌──────┐     ┌────────────┐     ┌───────┐
//! │ STEP │────▶│ STEP_GROUP │────▶│ STAGE │
//! └──────┘     └────────────┘     └───────┘
//!   binds first      then              last
//! ```
//!
//! A category claimed by an inner scope is never rebound by an outer one,
//! regardless of wildcard status. Within one scope, explicit categories bind
//! before the scope's `AnyOtherErrors` fallback, and an `AllErrors` rule
//! expands to every concrete category still unresolved.
//!
//! The merger is a pure function: no I/O, no shared state, safe to call
//! concurrently as long as each call owns its inputs.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace};

use crate::error::Result;
use crate::rules::{FailureRule, RemediationAction, Scope};
use crate::taxonomy::FailureCategory;
use crate::validation::validate_scope;

/// Output of a priority merge: each remediation action owns the set of
/// categories it will handle.
///
/// Categories partition across actions — each resolved category belongs to
/// exactly one action. Categories no scope mentioned are absent; the
/// execution engine supplies its own default for those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedActionMap {
    by_action: HashMap<RemediationAction, BTreeSet<FailureCategory>>,
}

impl ResolvedActionMap {
    /// The action that will handle `category`, if any scope claimed it.
    pub fn action_for(&self, category: FailureCategory) -> Option<&RemediationAction> {
        self.by_action
            .iter()
            .find(|(_, categories)| categories.contains(&category))
            .map(|(action, _)| action)
    }

    /// The categories owned by a structurally-equal action, if any.
    pub fn categories_for(&self, action: &RemediationAction) -> Option<&BTreeSet<FailureCategory>> {
        self.by_action.get(action)
    }

    /// Every category claimed by some action.
    pub fn resolved_categories(&self) -> BTreeSet<FailureCategory> {
        self.by_action.values().flatten().copied().collect()
    }

    /// Iterate over (action, owned categories) pairs in arbitrary order.
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&RemediationAction, &BTreeSet<FailureCategory>)> {
        self.by_action.iter()
    }

    /// Number of distinct actions in the mapping.
    pub fn len(&self) -> usize {
        self.by_action.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_action.is_empty()
    }

    fn bind(&mut self, action: &RemediationAction, category: FailureCategory) {
        self.by_action
            .entry(action.clone())
            .or_default()
            .insert(category);
    }
}

/// Merge up to three scope rule lists, innermost scope winning per category.
///
/// `None` means "no rules declared at this scope" and is treated as an empty
/// list. Every supplied scope is validated via
/// [`validate_scope`](crate::validation::validate_scope) before any binding
/// happens; a violation in any scope fails the whole merge.
pub fn priority_merge_failure_strategies(
    step_rules: Option<&[FailureRule]>,
    step_group_rules: Option<&[FailureRule]>,
    stage_rules: Option<&[FailureRule]>,
) -> Result<ResolvedActionMap> {
    let scopes: [(Scope, &[FailureRule]); 3] = [
        (Scope::Step, step_rules.unwrap_or_default()),
        (Scope::StepGroup, step_group_rules.unwrap_or_default()),
        (Scope::Stage, stage_rules.unwrap_or_default()),
    ];

    for (scope, rules) in &scopes {
        validate_scope(*scope, rules)?;
    }

    let mut resolved: HashSet<FailureCategory> = HashSet::new();
    let mut output = ResolvedActionMap::default();

    for (scope, rules) in &scopes {
        let mut other_fallback: Option<&RemediationAction> = None;

        for rule in *rules {
            if rule.is_all_errors_rule() {
                // Broadest fallback: claims whatever is still unresolved.
                for &category in FailureCategory::concrete() {
                    if resolved.insert(category) {
                        output.bind(&rule.action, category);
                    }
                }
            } else if rule.mentions_any_other() {
                // Deferred until this scope's explicit categories are bound:
                // "other" must not preempt explicit rules in the same scope.
                other_fallback = Some(&rule.action);
            } else {
                for &category in &rule.error_categories {
                    if resolved.insert(category) {
                        output.bind(&rule.action, category);
                    }
                }
            }
        }

        if let Some(action) = other_fallback {
            for &category in FailureCategory::concrete() {
                if resolved.insert(category) {
                    output.bind(action, category);
                }
            }
        }

        trace!(
            scope = %scope,
            resolved_categories = resolved.len(),
            "merged failure-strategy scope"
        );
    }

    debug!(
        actions = output.len(),
        resolved_categories = resolved.len(),
        "resolved failure strategies"
    );

    Ok(output)
}
