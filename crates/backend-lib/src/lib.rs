// ============================
// passgate-lib/src/lib.rs
// ============================
//! Core functionality for the `passgate` password validation service.

pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod router;
pub mod validation;

use crate::config::Settings;
use crate::validation::{PasswordValidator, RuleError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Password validator, built once at startup
    pub validator: Arc<PasswordValidator>,
    /// Settings the server was started with
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create a new application state
    pub fn new(validator: PasswordValidator, settings: Settings) -> Self {
        Self {
            validator: Arc::new(validator),
            settings: Arc::new(settings),
        }
    }

    /// Application state with the strong password rules
    pub fn with_settings(settings: Settings) -> Result<Self, RuleError> {
        Ok(Self::new(PasswordValidator::strong()?, settings))
    }
}
