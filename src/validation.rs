//! # Rule Validation
//!
//! Per-scope validation of failure-strategy rule lists, run before any merge
//! begins. A scope is valid when every category maps to exactly one action,
//! `AllErrors` never co-occurs with other categories, and every action payload
//! is well-formed.
//!
//! Also exposes the authoring-time helpers [`contains_only_any_other`] and
//! [`contains_only_all_errors`] used by plan-creation checks to flag wildcard
//! strategies that would shadow unreachable explicit rules; the merger itself
//! does not depend on them.

use std::collections::HashMap;

use crate::error::{Result, StrategyError};
use crate::rules::{FailureRule, RemediationAction, Scope};
use crate::taxonomy::FailureCategory;

/// Validate one scope's rule list.
///
/// Rejects: a category bound to two different actions within the scope,
/// `AllErrors` combined with other categories in one rule, rules with no
/// categories, and malformed action payloads. Duplicating a category across
/// rules with the *same* action is allowed.
pub fn validate_scope(scope: Scope, rules: &[FailureRule]) -> Result<()> {
    let mut bound: HashMap<FailureCategory, &RemediationAction> = HashMap::new();

    for rule in rules {
        if rule.error_categories.is_empty() {
            return Err(StrategyError::EmptyRule { scope });
        }
        if rule.error_categories.contains(&FailureCategory::AllErrors)
            && rule.error_categories.len() > 1
        {
            return Err(StrategyError::AllErrorsNotExclusive { scope });
        }
        validate_action(&rule.action)?;

        for &category in &rule.error_categories {
            match bound.get(&category) {
                Some(existing) if **existing != rule.action => {
                    return Err(StrategyError::ConflictingRule {
                        scope,
                        category,
                        first_action: existing.to_string(),
                        second_action: rule.action.to_string(),
                    });
                }
                _ => {
                    bound.insert(category, &rule.action);
                }
            }
        }
    }

    Ok(())
}

/// Validate a single action payload, recursing into fallback actions.
///
/// `Retry` needs a positive count and a non-empty interval list no longer than
/// the count; fallback actions must not be the same kind as their parent
/// (no retry-under-retry, no manual-intervention-under-manual-intervention).
pub fn validate_action(action: &RemediationAction) -> Result<()> {
    match action {
        RemediationAction::Retry {
            retry_count,
            retry_intervals_secs,
            on_retry_failure,
        } => {
            if *retry_count == 0 {
                return Err(StrategyError::InvalidRetry {
                    reason: "retryCount must be at least 1".to_string(),
                });
            }
            if retry_intervals_secs.is_empty() {
                return Err(StrategyError::InvalidRetry {
                    reason: "retryIntervalsSecs must not be empty".to_string(),
                });
            }
            if retry_intervals_secs.len() > *retry_count as usize {
                return Err(StrategyError::InvalidRetry {
                    reason: format!(
                        "{} retry intervals declared for {} retries",
                        retry_intervals_secs.len(),
                        retry_count
                    ),
                });
            }
            if let Some(fallback) = on_retry_failure {
                if fallback.is_same_kind(action) {
                    return Err(StrategyError::InvalidRetry {
                        reason: "onRetryFailure cannot itself be a Retry".to_string(),
                    });
                }
                validate_action(fallback)?;
            }
        }
        RemediationAction::ManualIntervention {
            timeout_secs,
            on_timeout,
        } => {
            if *timeout_secs == 0 {
                return Err(StrategyError::InvalidManualIntervention {
                    reason: "timeoutSecs must be at least 1".to_string(),
                });
            }
            if let Some(fallback) = on_timeout {
                if fallback.is_same_kind(action) {
                    return Err(StrategyError::InvalidManualIntervention {
                        reason: "onTimeout cannot itself be a ManualIntervention".to_string(),
                    });
                }
                validate_action(fallback)?;
            }
        }
        RemediationAction::Abort
        | RemediationAction::Ignore
        | RemediationAction::MarkAsSuccess
        | RemediationAction::StageRollback => {}
    }

    Ok(())
}

/// True iff the list is exactly one rule whose sole category is `AnyOtherErrors`.
pub fn contains_only_any_other(rules: &[FailureRule]) -> bool {
    is_single_wildcard(rules, FailureCategory::AnyOtherErrors)
}

/// True iff the list is exactly one rule whose sole category is `AllErrors`.
pub fn contains_only_all_errors(rules: &[FailureRule]) -> bool {
    is_single_wildcard(rules, FailureCategory::AllErrors)
}

fn is_single_wildcard(rules: &[FailureRule], wildcard: FailureCategory) -> bool {
    match rules {
        [rule] => rule.error_categories.len() == 1 && rule.error_categories.contains(&wildcard),
        _ => false,
    }
}
