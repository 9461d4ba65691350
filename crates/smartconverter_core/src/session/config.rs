//! Session tuning knobs.

use crate::format::NumberLocale;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

/// Delay before a copied highlight is cleared.
pub const DEFAULT_HIGHLIGHT_CLEAR_DELAY: Duration = Duration::from_secs(2);

/// Runtime configuration for one conversion session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub highlight_clear_delay: Duration,
    pub locale: NumberLocale,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            highlight_clear_delay: DEFAULT_HIGHLIGHT_CLEAR_DELAY,
            locale: NumberLocale::default(),
        }
    }
}

impl SessionConfig {
    /// Checks that the configuration can drive a session.
    ///
    /// # Errors
    /// - `ZeroHighlightDelay` when the clear delay is zero.
    /// - `EmptyDecimalSeparator` when the locale has no decimal separator.
    pub fn validate(&self) -> Result<(), SessionConfigError> {
        if self.highlight_clear_delay.is_zero() {
            return Err(SessionConfigError::ZeroHighlightDelay);
        }
        if self.locale.decimal_separator.is_empty() {
            return Err(SessionConfigError::EmptyDecimalSeparator);
        }
        Ok(())
    }
}

/// Session configuration validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionConfigError {
    ZeroHighlightDelay,
    EmptyDecimalSeparator,
}

impl Display for SessionConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroHighlightDelay => write!(f, "highlight clear delay must be greater than zero"),
            Self::EmptyDecimalSeparator => write!(f, "locale decimal separator must not be empty"),
        }
    }
}

impl Error for SessionConfigError {}
