// ============================
// crates/backend-lib/src/validation/rules.rs
// ============================
//! Password strength rules.
//!
//! Every rule is an independent predicate over the raw password. Rules are
//! stateless, so a [`RuleSet`] can be shared across threads without locking.

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Minimum number of characters a strong password must have
pub const MIN_PASSWORD_LENGTH: usize = 9;

/// Characters accepted by the special character rule
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()-+";

// ASCII whitespace only: tab, newline, form feed, carriage return, space
const NO_WHITESPACE_PATTERN: &str = r"^[^\t\n\x0C\r ]*$";
const DIGIT_PATTERN: &str = r"[0-9]";
const LOWERCASE_PATTERN: &str = r"[a-z]";
const UPPERCASE_PATTERN: &str = r"[A-Z]";
const SPECIAL_PATTERN: &str = r"[!@#$%^&*()\-+]";

/// Errors raised while building a rule set
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Rule set must contain at least one rule")]
    Empty,

    #[error("Invalid pattern for rule {rule}: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// A single pass/fail check over a candidate password
pub trait Rule: Send + Sync {
    /// Stable identifier used in logs and outcome reports
    fn name(&self) -> &'static str;

    /// Returns `true` when the password satisfies this rule
    fn evaluate(&self, password: &str) -> bool;
}

/// Rule backed by a regular expression that must match somewhere in the input
pub struct PatternRule {
    name: &'static str,
    regex: Regex,
}

impl PatternRule {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self, RuleError> {
        let regex = Regex::new(pattern).map_err(|source| RuleError::Pattern { rule: name, source })?;
        Ok(Self { name, regex })
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, password: &str) -> bool {
        self.regex.is_match(password)
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("pattern", &self.regex.as_str())
            .finish()
    }
}

/// Counts characters, not bytes
#[derive(Debug, Clone, Copy)]
pub struct MinLength(pub usize);

impl Rule for MinLength {
    fn name(&self) -> &'static str {
        "min_length"
    }

    fn evaluate(&self, password: &str) -> bool {
        password.chars().count() >= self.0
    }
}

/// Rejects any character occurring more than once, anywhere in the input.
/// Comparison is case-sensitive: `a` and `A` are different characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRepeatedChars;

impl Rule for NoRepeatedChars {
    fn name(&self) -> &'static str {
        "no_repeated_chars"
    }

    fn evaluate(&self, password: &str) -> bool {
        let mut seen = HashSet::with_capacity(password.len());
        password.chars().all(|c| seen.insert(c))
    }
}

/// Ordered, non-empty and immutable collection of rules
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Build a rule set from an explicit list of rules
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::Empty);
        }
        Ok(Self { rules })
    }

    /// The fixed rules a strong password has to satisfy
    pub fn strong_password() -> Result<Self, RuleError> {
        Self::new(vec![
            Box::new(PatternRule::new("no_whitespace", NO_WHITESPACE_PATTERN)?),
            Box::new(MinLength(MIN_PASSWORD_LENGTH)),
            Box::new(PatternRule::new("has_digit", DIGIT_PATTERN)?),
            Box::new(PatternRule::new("has_lowercase", LOWERCASE_PATTERN)?),
            Box::new(PatternRule::new("has_uppercase", UPPERCASE_PATTERN)?),
            Box::new(PatternRule::new("has_special", SPECIAL_PATTERN)?),
            Box::new(NoRepeatedChars),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Never true for a constructed set
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.iter().map(|rule| rule.name()).collect()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
