#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Failure Strategy Core
//!
//! Deterministic failure-strategy resolution for workflow orchestration
//! pipelines.
//!
//! ## Overview
//!
//! Pipeline authors declare failure-handling rules at three nesting scopes:
//! per step, per step group, and per stage. Each rule binds a set of failure
//! categories to one remediation action. When a step fails, the execution
//! engine needs a single answer per category — this crate computes that
//! answer with a conflict-detecting priority merge where the most specific
//! scope always wins.
//!
//! The resolver is a pure library function: no I/O, no persistence, no
//! concurrency concerns. YAML parsing of pipeline definitions and the actual
//! execution of remediation actions are external collaborators; this crate
//! consumes already-parsed rule lists and produces an in-memory mapping.
//!
//! ## Module Organization
//!
//! - [`taxonomy`] - Closed failure-category set with wildcard sentinels
//! - [`rules`] - Rule, action, and scope DTOs matching the pipeline YAML shape
//! - [`validation`] - Per-scope conflict and payload validation
//! - [`resolver`] - The priority-merge algorithm and its output map
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use failure_strategy_core::{
//!     priority_merge_failure_strategies, FailureCategory, FailureRule, RemediationAction,
//! };
//!
//! let step = vec![FailureRule::new(
//!     [FailureCategory::Authentication],
//!     RemediationAction::Ignore,
//! )];
//! let stage = vec![FailureRule::new(
//!     [FailureCategory::AllErrors],
//!     RemediationAction::Abort,
//! )];
//!
//! let resolved = priority_merge_failure_strategies(Some(&step), None, Some(&stage))?;
//!
//! // The step-scope rule wins for Authentication; everything else falls to
//! // the stage-wide Abort.
//! assert_eq!(
//!     resolved.action_for(FailureCategory::Authentication),
//!     Some(&RemediationAction::Ignore)
//! );
//! assert_eq!(
//!     resolved.action_for(FailureCategory::Timeout),
//!     Some(&RemediationAction::Abort)
//! );
//! # Ok::<(), failure_strategy_core::StrategyError>(())
//! ```

pub mod error;
pub mod resolver;
pub mod rules;
pub mod taxonomy;
pub mod validation;

pub use error::{Result, StrategyError};
pub use resolver::{priority_merge_failure_strategies, ResolvedActionMap};
pub use rules::{FailureRule, RemediationAction, Scope};
pub use taxonomy::FailureCategory;
pub use validation::{
    contains_only_all_errors, contains_only_any_other, validate_action, validate_scope,
};
