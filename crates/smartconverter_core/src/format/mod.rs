//! Numeric input parsing and display formatting.
//!
//! # Responsibility
//! - Turn arbitrary user text into a number without ever failing.
//! - Render converted values the way result cards display them.

pub mod number;

pub use number::{format_value, format_value_with, parse_value, NumberLocale};
