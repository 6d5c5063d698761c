//! # Failure Rule Model
//!
//! The rule DTOs that pipeline authors declare, matching the YAML structure of
//! pipeline definitions exactly as stored in the `failureStrategies` field:
//! each rule binds a set of [`FailureCategory`] values to one
//! [`RemediationAction`], and rules are declared at one of three nesting
//! scopes ([`Scope`]). Parsing the surrounding pipeline document is an
//! external concern; this crate consumes already-parsed rule lists.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::mem;

use crate::taxonomy::FailureCategory;

/// Response to take when a step fails with a matching category.
///
/// Actions are opaque to the merger: it never interprets them, only groups
/// resolved categories by structurally-equal actions. `Retry` and
/// `ManualIntervention` carry an optional fallback action applied when the
/// action itself is exhausted; a fallback of the same kind as its parent is
/// rejected by [`crate::validation::validate_action`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RemediationAction {
    /// Fail the step and abort the pipeline
    Abort,
    /// Swallow the failure and continue
    Ignore,
    /// Record the step as successful despite the failure
    MarkAsSuccess,
    /// Roll the enclosing stage back to its pre-execution state
    StageRollback,
    /// Pause for an operator decision
    #[serde(rename_all = "camelCase")]
    ManualIntervention {
        /// How long to wait for the operator before giving up
        timeout_secs: u64,
        /// Action applied when no operator responds in time
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_timeout: Option<Box<RemediationAction>>,
    },
    /// Re-run the step on a delay schedule
    #[serde(rename_all = "camelCase")]
    Retry {
        /// Maximum number of re-runs
        retry_count: u32,
        /// Delay before each re-run; the last entry repeats if retries outnumber it
        retry_intervals_secs: Vec<u64>,
        /// Action applied once every retry is exhausted
        #[serde(default, skip_serializing_if = "Option::is_none")]
        on_retry_failure: Option<Box<RemediationAction>>,
    },
}

impl RemediationAction {
    /// Discriminator name as it appears in the `type` tag.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Abort => "Abort",
            Self::Ignore => "Ignore",
            Self::MarkAsSuccess => "MarkAsSuccess",
            Self::StageRollback => "StageRollback",
            Self::ManualIntervention { .. } => "ManualIntervention",
            Self::Retry { .. } => "Retry",
        }
    }

    /// True when both actions are the same variant, ignoring payloads.
    pub fn is_same_kind(&self, other: &RemediationAction) -> bool {
        mem::discriminant(self) == mem::discriminant(other)
    }
}

impl fmt::Display for RemediationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind())
    }
}

/// One failure-strategy rule: a set of categories bound to a single action.
///
/// Invariants (enforced by [`crate::validation::validate_scope`]): the category
/// set is non-empty, and `AllErrors` is the sole member when present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRule {
    /// Categories this rule claims
    pub error_categories: BTreeSet<FailureCategory>,
    /// Action bound to every claimed category
    pub action: RemediationAction,
}

impl FailureRule {
    /// Build a rule from any category iterable.
    pub fn new(
        categories: impl IntoIterator<Item = FailureCategory>,
        action: RemediationAction,
    ) -> Self {
        Self {
            error_categories: categories.into_iter().collect(),
            action,
        }
    }

    /// True iff this rule is the singleton `{AllErrors}` rule.
    pub fn is_all_errors_rule(&self) -> bool {
        self.error_categories.len() == 1
            && self.error_categories.contains(&FailureCategory::AllErrors)
    }

    /// True iff this rule claims the `AnyOtherErrors` wildcard.
    pub fn mentions_any_other(&self) -> bool {
        self.error_categories.contains(&FailureCategory::AnyOtherErrors)
    }
}

/// Nesting level at which a failure-strategy rule list is declared.
///
/// Priority runs from the innermost scope outward: a `Step` rule always beats
/// a `StepGroup` rule for the same category, which in turn beats a `Stage`
/// rule, regardless of wildcard status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Single execution unit (innermost, highest priority)
    Step,
    /// Named cluster of steps
    StepGroup,
    /// Top-level pipeline phase (outermost, lowest priority)
    Stage,
}

impl Scope {
    /// All scopes, innermost first — the order the merger walks them.
    pub const fn in_priority_order() -> &'static [Scope] {
        &[Self::Step, Self::StepGroup, Self::Stage]
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Step => write!(f, "step"),
            Self::StepGroup => write!(f, "step_group"),
            Self::Stage => write!(f, "stage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_errors_rule_detection() {
        let rule = FailureRule::new([FailureCategory::AllErrors], RemediationAction::Abort);
        assert!(rule.is_all_errors_rule());

        let mixed = FailureRule::new(
            [FailureCategory::AllErrors, FailureCategory::Timeout],
            RemediationAction::Abort,
        );
        assert!(!mixed.is_all_errors_rule());

        let explicit = FailureRule::new([FailureCategory::Timeout], RemediationAction::Abort);
        assert!(!explicit.is_all_errors_rule());
    }

    #[test]
    fn test_same_kind_ignores_payload() {
        let short = RemediationAction::Retry {
            retry_count: 1,
            retry_intervals_secs: vec![5],
            on_retry_failure: None,
        };
        let long = RemediationAction::Retry {
            retry_count: 3,
            retry_intervals_secs: vec![10, 20, 30],
            on_retry_failure: Some(Box::new(RemediationAction::Abort)),
        };
        assert!(short.is_same_kind(&long));
        assert_ne!(short, long);
        assert!(!short.is_same_kind(&RemediationAction::Abort));
    }

    #[test]
    fn test_action_serde_tagged_by_type() {
        let action = RemediationAction::Retry {
            retry_count: 2,
            retry_intervals_secs: vec![10, 20],
            on_retry_failure: Some(Box::new(RemediationAction::MarkAsSuccess)),
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["type"], "Retry");
        assert_eq!(json["retryCount"], 2);
        assert_eq!(json["onRetryFailure"]["type"], "MarkAsSuccess");

        let back: RemediationAction = serde_json::from_value(json).unwrap();
        assert_eq!(back, action);
    }

    #[test]
    fn test_rule_serde_shape() {
        let rule = FailureRule::new(
            [FailureCategory::Timeout, FailureCategory::Connectivity],
            RemediationAction::Ignore,
        );
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(
            json["errorCategories"],
            serde_json::json!(["Connectivity", "Timeout"])
        );
        assert_eq!(json["action"]["type"], "Ignore");
    }

    #[test]
    fn test_scope_priority_order() {
        assert_eq!(
            Scope::in_priority_order(),
            &[Scope::Step, Scope::StepGroup, Scope::Stage]
        );
    }
}
