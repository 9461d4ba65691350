//! Core logic for SmartConverter.
//! This crate is the single source of truth for conversion and display rules.

pub mod catalog;
pub mod format;
pub mod logging;
pub mod model;
pub mod session;

pub use catalog::{find_conversion, get_catalog, parse_conversion_id, CatalogError};
pub use format::{format_value, format_value_with, parse_value, NumberLocale};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::conversion::{
    slug_id, Category, CategoryId, ConversionDefinition, ConversionId, Transform,
};
pub use session::{
    CategoryView, Clipboard, Command, ConversionSession, Dispatcher, Effect, Feedback,
    NoopFeedback, ResultView, SessionConfig, SessionConfigError, SessionView,
    DEFAULT_HIGHLIGHT_CLEAR_DELAY,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
