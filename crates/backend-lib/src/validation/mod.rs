// ============================
// crates/backend-lib/src/validation/mod.rs
// ============================
//! Password validation engine.
//!
//! Knows nothing about HTTP: callers hand in a `&str` and get a `bool` back.

pub mod rules;
pub mod validator;

pub use rules::{
    MinLength, NoRepeatedChars, PatternRule, Rule, RuleError, RuleSet, MIN_PASSWORD_LENGTH,
    SPECIAL_CHARACTERS,
};
pub use validator::{PasswordValidator, RuleOutcome};
