//! # Strategy Error Types
//!
//! Structured error handling for failure-strategy resolution using thiserror.
//!
//! Every variant is a configuration-authoring error: it means the pipeline
//! definition itself is invalid and must be fixed, not retried. Callers
//! surface these at definition-save or plan-creation time, before execution.

use thiserror::Error;

use crate::rules::Scope;
use crate::taxonomy::FailureCategory;

/// Errors raised while validating or merging failure-strategy rules.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StrategyError {
    #[error("Conflicting failure strategies at {scope} scope: category {category} is bound to both {first_action} and {second_action}")]
    ConflictingRule {
        scope: Scope,
        category: FailureCategory,
        first_action: String,
        second_action: String,
    },

    #[error("Invalid rule at {scope} scope: AllErrors cannot be combined with other categories in one rule")]
    AllErrorsNotExclusive { scope: Scope },

    #[error("Invalid rule at {scope} scope: a failure rule must declare at least one error category")]
    EmptyRule { scope: Scope },

    #[error("Invalid Retry action: {reason}")]
    InvalidRetry { reason: String },

    #[error("Invalid ManualIntervention action: {reason}")]
    InvalidManualIntervention { reason: String },
}

pub type Result<T> = std::result::Result<T, StrategyError>;
