//! # Failure Taxonomy
//!
//! Closed set of failure categories a step execution can report, plus the two
//! wildcard sentinels used by failure-strategy rules.
//!
//! `AnyOtherErrors` matches every category not otherwise claimed within the same
//! resolution pass; `AllErrors` matches every category and must be the sole
//! member of any rule that uses it (enforced by [`crate::validation`]).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of why a step execution failed.
///
/// Serialized as the PascalCase identifiers used in pipeline definitions
/// (`"Authentication"`, `"AnyOtherErrors"`, ...). Adding a category is an
/// explicit, compile-checked change: extend the enum and the
/// [`FailureCategory::concrete`] list together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FailureCategory {
    /// Credential or identity failure against an external system
    Authentication,
    /// Permission denied by an external system or policy
    Authorization,
    /// Network-level failure reaching a dependency
    Connectivity,
    /// Step exceeded its execution deadline
    Timeout,
    /// Post-deployment verification failed
    Verification,
    /// No execution delegate could be provisioned for the step
    DelegateProvisioning,
    /// Governance policy evaluation rejected the step
    PolicyEvaluation,
    /// A required runtime input was not supplied in time
    InputTimeout,
    /// A human approval step was rejected
    ApprovalRejection,
    /// Wildcard: any category not explicitly claimed in the same pass
    AnyOtherErrors,
    /// Wildcard: every category; mutually exclusive with all others in a rule
    AllErrors,
}

impl FailureCategory {
    /// True only for the `AllErrors` wildcard.
    pub const fn is_all_errors(&self) -> bool {
        matches!(self, Self::AllErrors)
    }

    /// True only for the `AnyOtherErrors` wildcard.
    pub const fn is_any_other(&self) -> bool {
        matches!(self, Self::AnyOtherErrors)
    }

    /// True for either wildcard sentinel.
    pub const fn is_wildcard(&self) -> bool {
        self.is_all_errors() || self.is_any_other()
    }

    /// Every non-wildcard category, in declaration order.
    ///
    /// This is the set a wildcard expands to during resolution.
    pub const fn concrete() -> &'static [FailureCategory] {
        &[
            Self::Authentication,
            Self::Authorization,
            Self::Connectivity,
            Self::Timeout,
            Self::Verification,
            Self::DelegateProvisioning,
            Self::PolicyEvaluation,
            Self::InputTimeout,
            Self::ApprovalRejection,
        ]
    }
}

impl fmt::Display for FailureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authentication => write!(f, "Authentication"),
            Self::Authorization => write!(f, "Authorization"),
            Self::Connectivity => write!(f, "Connectivity"),
            Self::Timeout => write!(f, "Timeout"),
            Self::Verification => write!(f, "Verification"),
            Self::DelegateProvisioning => write!(f, "DelegateProvisioning"),
            Self::PolicyEvaluation => write!(f, "PolicyEvaluation"),
            Self::InputTimeout => write!(f, "InputTimeout"),
            Self::ApprovalRejection => write!(f, "ApprovalRejection"),
            Self::AnyOtherErrors => write!(f, "AnyOtherErrors"),
            Self::AllErrors => write!(f, "AllErrors"),
        }
    }
}

impl FromStr for FailureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Authentication" => Ok(Self::Authentication),
            "Authorization" => Ok(Self::Authorization),
            "Connectivity" => Ok(Self::Connectivity),
            "Timeout" => Ok(Self::Timeout),
            "Verification" => Ok(Self::Verification),
            "DelegateProvisioning" => Ok(Self::DelegateProvisioning),
            "PolicyEvaluation" => Ok(Self::PolicyEvaluation),
            "InputTimeout" => Ok(Self::InputTimeout),
            "ApprovalRejection" => Ok(Self::ApprovalRejection),
            "AnyOtherErrors" => Ok(Self::AnyOtherErrors),
            "AllErrors" => Ok(Self::AllErrors),
            _ => Err(format!("Unknown failure category: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_predicates() {
        assert!(FailureCategory::AllErrors.is_all_errors());
        assert!(FailureCategory::AllErrors.is_wildcard());
        assert!(FailureCategory::AnyOtherErrors.is_any_other());
        assert!(FailureCategory::AnyOtherErrors.is_wildcard());
        assert!(!FailureCategory::AllErrors.is_any_other());
        assert!(!FailureCategory::Timeout.is_wildcard());
    }

    #[test]
    fn test_concrete_excludes_wildcards() {
        let concrete = FailureCategory::concrete();
        assert_eq!(concrete.len(), 9);
        assert!(concrete.iter().all(|c| !c.is_wildcard()));
    }

    #[test]
    fn test_serde_uses_pipeline_identifiers() {
        let json = serde_json::to_string(&FailureCategory::AnyOtherErrors).unwrap();
        assert_eq!(json, "\"AnyOtherErrors\"");

        let parsed: FailureCategory = serde_json::from_str("\"DelegateProvisioning\"").unwrap();
        assert_eq!(parsed, FailureCategory::DelegateProvisioning);
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for category in FailureCategory::concrete() {
            let parsed: FailureCategory = category.to_string().parse().unwrap();
            assert_eq!(parsed, *category);
        }
        assert!("NotACategory".parse::<FailureCategory>().is_err());
    }
}
