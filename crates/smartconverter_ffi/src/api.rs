//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose catalog, input and copy use-cases to Dart via FRB.
//! - Hand clipboard/haptic/timer work back to the shell as plain data.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - One process-wide session backs every call.
//! - Conversion ids cross the boundary as UUID strings.

use log::warn;
use smartconverter_core::{
    core_version as core_version_inner, default_log_level as default_log_level_inner,
    get_catalog, init_logging as init_logging_inner,
    parse_conversion_id, ping as ping_inner, ConversionSession, Effect, SessionView,
};
use std::sync::{Mutex, MutexGuard, OnceLock};

static SESSION: OnceLock<Mutex<ConversionSession>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Build-mode default for `init_logging(level, ..)`.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Returns `debug` for debug builds and `info` for release builds.
#[flutter_rust_bridge::frb(sync)]
pub fn default_log_level() -> String {
    default_log_level_inner().to_owned()
}

/// Catalog entry for one conversion card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiConversion {
    pub conversion_id: String,
    pub label: String,
    pub source_unit_symbol: String,
    pub destination_unit_symbol: String,
}

/// Catalog entry for one category section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiCategory {
    pub category_id: String,
    pub title: String,
    pub icon_id: String,
    pub conversions: Vec<FfiConversion>,
}

/// One rendered result card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfiResultCard {
    pub conversion_id: String,
    pub label: String,
    pub source_unit_symbol: String,
    pub destination_unit_symbol: String,
    pub formatted_value: String,
    pub is_copied: bool,
}

/// Full screen snapshot returned after every state-changing call.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub raw_input: String,
    pub numeric_value: f64,
    /// Currently highlighted conversion id, if any.
    pub copied_conversion_id: Option<String>,
    /// Result cards in display order across all categories.
    pub cards: Vec<FfiResultCard>,
}

/// Copy response envelope.
///
/// On success the shell writes `text` to the clipboard, plays a medium
/// haptic and calls `converter_expire_highlight` after `clear_after_ms`.
#[derive(Debug, Clone, PartialEq)]
pub struct CopyResponse {
    pub ok: bool,
    pub text: Option<String>,
    pub clear_after_ms: Option<u64>,
    pub haptic: bool,
    pub snapshot: SessionSnapshot,
    /// Human-readable message for diagnostics.
    pub message: String,
}

/// Returns the static conversion catalog.
///
/// # FFI contract
/// - Sync call, non-blocking, deterministic.
#[flutter_rust_bridge::frb(sync)]
pub fn converter_catalog() -> Vec<FfiCategory> {
    get_catalog()
        .iter()
        .map(|category| FfiCategory {
            category_id: category.id.to_string(),
            title: category.title.clone(),
            icon_id: category.icon_id.clone(),
            conversions: category
                .conversions
                .iter()
                .map(|conversion| FfiConversion {
                    conversion_id: conversion.id.to_string(),
                    label: conversion.label.clone(),
                    source_unit_symbol: conversion.source_unit_symbol.clone(),
                    destination_unit_symbol: conversion.destination_unit_symbol.clone(),
                })
                .collect(),
        })
        .collect()
}

/// Returns the current screen snapshot without changing state.
#[flutter_rust_bridge::frb(sync)]
pub fn converter_snapshot() -> SessionSnapshot {
    to_snapshot(lock_session().view())
}

/// Replaces the raw input text and returns the recomputed snapshot.
///
/// # FFI contract
/// - Accepts any text; non-numeric input converts from zero.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn converter_set_input(text: String) -> SessionSnapshot {
    let mut session = lock_session();
    session.set_input(text);
    to_snapshot(session.view())
}

/// Copies one result and highlights its card.
///
/// # FFI contract
/// - `conversion_id` must be a catalog UUID string.
/// - Returns `ok=false` with unchanged state for unknown/malformed ids.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn converter_copy(conversion_id: String) -> CopyResponse {
    let mut session = lock_session();
    let id = match parse_conversion_id(conversion_id.as_str()) {
        Ok(id) => id,
        Err(err) => {
            return CopyResponse {
                ok: false,
                text: None,
                clear_after_ms: None,
                haptic: false,
                snapshot: to_snapshot(session.view()),
                message: format!("converter_copy failed: {err}"),
            };
        }
    };

    let mut response = CopyResponse {
        ok: true,
        text: None,
        clear_after_ms: None,
        haptic: false,
        snapshot: to_snapshot(session.view()),
        message: "Copied.".to_string(),
    };
    for effect in session.copy(id) {
        match effect {
            Effect::WriteClipboard(text) => response.text = Some(text),
            Effect::ImpactFeedback => response.haptic = true,
            Effect::ScheduleHighlightClear { after, .. } => {
                response.clear_after_ms = Some(u64::try_from(after.as_millis()).unwrap_or(u64::MAX));
            }
        }
    }
    response.snapshot = to_snapshot(session.view());
    response
}

/// Deferred highlight clear scheduled by a previous `converter_copy`.
///
/// # FFI contract
/// - Clears the highlight only if it still points at `conversion_id`.
/// - Malformed ids are ignored.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn converter_expire_highlight(conversion_id: String) -> SessionSnapshot {
    let mut session = lock_session();
    match parse_conversion_id(conversion_id.as_str()) {
        Ok(id) => {
            session.expire_highlight(id);
        }
        Err(err) => warn!(
            "event=expire_highlight module=ffi status=skipped error={}",
            err
        ),
    }
    to_snapshot(session.view())
}

fn lock_session() -> MutexGuard<'static, ConversionSession> {
    SESSION
        .get_or_init(|| Mutex::new(ConversionSession::new()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn to_snapshot(view: SessionView) -> SessionSnapshot {
    let cards = view
        .categories
        .into_iter()
        .flat_map(|category| category.results.into_iter())
        .map(|result| FfiResultCard {
            conversion_id: result.conversion_id.to_string(),
            label: result.label,
            source_unit_symbol: result.source_unit_symbol,
            destination_unit_symbol: result.destination_unit_symbol,
            formatted_value: result.formatted_value,
            is_copied: result.is_copied,
        })
        .collect();

    SessionSnapshot {
        raw_input: view.raw_input,
        numeric_value: view.numeric_value,
        copied_conversion_id: view.highlighted_conversion_id.map(|id| id.to_string()),
        cards,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        converter_catalog, converter_copy, converter_expire_highlight, converter_set_input,
        converter_snapshot, core_version, default_log_level, init_logging, ping,
    };
    use std::sync::Mutex;

    // The FFI session is process-wide; serialize tests that mutate it.
    static SESSION_TESTS: Mutex<()> = Mutex::new(());

    fn card_id(label: &str) -> String {
        converter_catalog()
            .into_iter()
            .flat_map(|category| category.conversions.into_iter())
            .find(|conversion| conversion.label == label)
            .map(|conversion| conversion.conversion_id)
            .expect("label should exist in catalog")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn default_log_level_is_a_supported_level() {
        let level = default_log_level();
        assert!(level == "debug" || level == "info", "unexpected level {level}");
        let error = init_logging(level, String::new());
        assert!(!error.contains("unsupported log level"));
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(error.contains("unsupported log level"));
    }

    #[test]
    fn catalog_lists_four_categories_and_nine_cards() {
        let catalog = converter_catalog();
        assert_eq!(catalog.len(), 4);
        assert_eq!(
            catalog.iter().map(|c| c.conversions.len()).sum::<usize>(),
            9
        );
        assert_eq!(catalog[0].title, "Temperature");
    }

    #[test]
    fn set_input_returns_recomputed_cards() {
        let _guard = SESSION_TESTS.lock().unwrap_or_else(|p| p.into_inner());
        let snapshot = converter_set_input("100".to_string());
        assert_eq!(snapshot.raw_input, "100");
        assert_eq!(snapshot.cards.len(), 9);
        assert_eq!(snapshot.cards[0].formatted_value, "212");
        assert_eq!(snapshot.cards[1].formatted_value, "37.78");
        assert_eq!(converter_snapshot(), snapshot);
    }

    #[test]
    fn copy_returns_text_and_clear_delay_then_expires() {
        let _guard = SESSION_TESTS.lock().unwrap_or_else(|p| p.into_inner());
        converter_set_input("100".to_string());
        let first = card_id("Meters to Feet");
        let second = card_id("Feet to Meters");

        let response = converter_copy(first.clone());
        assert!(response.ok, "{}", response.message);
        assert_eq!(response.text.as_deref(), Some("328.08"));
        assert_eq!(response.clear_after_ms, Some(2_000));
        assert!(response.haptic);
        assert_eq!(
            response.snapshot.copied_conversion_id.as_deref(),
            Some(first.as_str())
        );

        converter_copy(second.clone());
        let after_stale = converter_expire_highlight(first);
        assert_eq!(
            after_stale.copied_conversion_id.as_deref(),
            Some(second.as_str())
        );

        let after_clear = converter_expire_highlight(second);
        assert_eq!(after_clear.copied_conversion_id, None);
        assert!(after_clear.cards.iter().all(|card| !card.is_copied));
    }

    #[test]
    fn copy_rejects_unknown_conversion_id() {
        let _guard = SESSION_TESTS.lock().unwrap_or_else(|p| p.into_inner());
        let response = converter_copy("not-a-uuid".to_string());
        assert!(!response.ok);
        assert!(response.text.is_none());
        assert!(response.message.contains("not a valid uuid"));
    }
}
