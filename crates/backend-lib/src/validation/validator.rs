//! Reduces a rule set to a single pass/fail verdict.

use super::rules::{RuleError, RuleSet};
use tracing::debug;

/// Result of evaluating one rule against one password
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub passed: bool,
}

/// Stateless password validator.
///
/// Built once at startup and shared behind an `Arc`; `validate` takes `&self`
/// and keeps nothing between calls.
#[derive(Debug)]
pub struct PasswordValidator {
    rules: RuleSet,
}

impl PasswordValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Validator over the fixed strong password rules
    pub fn strong() -> Result<Self, RuleError> {
        Ok(Self::new(RuleSet::strong_password()?))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Evaluate every rule, without short-circuiting, in rule set order
    pub fn outcomes(&self, password: &str) -> Vec<RuleOutcome> {
        self.rules
            .iter()
            .map(|rule| {
                let passed = rule.evaluate(password);
                debug!(rule = rule.name(), passed, "Executed validation rule");
                RuleOutcome {
                    rule: rule.name(),
                    passed,
                }
            })
            .collect()
    }

    /// `true` iff the password satisfies every rule
    pub fn validate(&self, password: &str) -> bool {
        self.outcomes(password).iter().all(|outcome| outcome.passed)
    }
}
