//! Session state and its command reducer.
//!
//! The reducer mutates session state and returns the effects the caller must
//! run. It performs no I/O itself, so every transition (including the stale
//! highlight-clear race) is testable without a clipboard or a real timer.

use crate::catalog::{find_conversion, get_catalog};
use crate::format::{format_value_with, parse_value};
use crate::model::conversion::{ConversionDefinition, ConversionId};
use crate::session::config::{SessionConfig, SessionConfigError};
use crate::session::view::{CategoryView, ResultView, SessionView};
use log::{debug, info, warn};
use std::time::Duration;

/// User or timer event fed into a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the raw input text.
    SetInput(String),
    /// Copy one conversion result.
    Copy(ConversionId),
    /// Deferred clear scheduled by an earlier copy of this conversion.
    HighlightExpired(ConversionId),
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write formatted text to the system clipboard; failures are ignored.
    WriteClipboard(String),
    /// Cosmetic haptic tap on copy.
    ImpactFeedback,
    /// Feed `Command::HighlightExpired(conversion_id)` back after `after`.
    ScheduleHighlightClear {
        conversion_id: ConversionId,
        after: Duration,
    },
}

/// Mutable state for one interaction sequence.
#[derive(Debug, Clone)]
pub struct ConversionSession {
    raw_input: String,
    highlighted_conversion_id: Option<ConversionId>,
    config: SessionConfig,
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self {
            raw_input: String::new(),
            highlighted_conversion_id: None,
            config: SessionConfig::default(),
        }
    }
}

impl ConversionSession {
    /// Creates an empty session with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty session after validating `config`.
    pub fn with_config(config: SessionConfig) -> Result<Self, SessionConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    pub fn raw_input(&self) -> &str {
        self.raw_input.as_str()
    }

    pub fn highlighted_conversion_id(&self) -> Option<ConversionId> {
        self.highlighted_conversion_id
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current input as a number; `0.0` when the text is not numeric.
    pub fn numeric_value(&self) -> f64 {
        parse_value(&self.raw_input)
    }

    /// Formatted display value of one conversion for the current input.
    pub fn formatted_result(&self, conversion: &ConversionDefinition) -> String {
        format_value_with(
            &self.raw_input,
            conversion.convert(self.numeric_value()),
            &self.config.locale,
        )
    }

    /// Reduces one command into state changes and effects.
    pub fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::SetInput(text) => self.set_input(text),
            Command::Copy(conversion_id) => self.copy(conversion_id),
            Command::HighlightExpired(conversion_id) => self.expire_highlight(conversion_id),
        }
    }

    /// Replaces the raw input unconditionally. Produces no effects.
    pub fn set_input(&mut self, text: impl Into<String>) -> Vec<Effect> {
        self.raw_input = text.into();
        debug!(
            "event=input_changed module=session status=ok input_len={}",
            self.raw_input.len()
        );
        Vec::new()
    }

    /// Highlights one conversion and requests clipboard, haptic and a
    /// deferred clear.
    ///
    /// Unknown conversion ids leave state untouched and produce no effects.
    pub fn copy(&mut self, conversion_id: ConversionId) -> Vec<Effect> {
        let Some(conversion) = find_conversion(conversion_id) else {
            warn!(
                "event=copy module=session status=skipped reason=unknown_conversion conversion={}",
                conversion_id
            );
            return Vec::new();
        };

        let text = self.formatted_result(conversion);
        self.highlighted_conversion_id = Some(conversion_id);
        info!(
            "event=copy module=session status=ok conversion={} clear_after_ms={}",
            conversion_id,
            self.config.highlight_clear_delay.as_millis()
        );

        vec![
            Effect::WriteClipboard(text),
            Effect::ImpactFeedback,
            Effect::ScheduleHighlightClear {
                conversion_id,
                after: self.config.highlight_clear_delay,
            },
        ]
    }

    /// Clears the highlight only if it still points at `conversion_id`.
    pub fn expire_highlight(&mut self, conversion_id: ConversionId) -> Vec<Effect> {
        if self.highlighted_conversion_id == Some(conversion_id) {
            self.highlighted_conversion_id = None;
            debug!(
                "event=highlight_cleared module=session status=ok conversion={}",
                conversion_id
            );
        } else {
            debug!(
                "event=highlight_cleared module=session status=stale conversion={}",
                conversion_id
            );
        }
        Vec::new()
    }

    /// Derives the full display snapshot from current state.
    pub fn view(&self) -> SessionView {
        let categories = get_catalog()
            .iter()
            .map(|category| CategoryView {
                id: category.id,
                title: category.title.clone(),
                icon_id: category.icon_id.clone(),
                results: category
                    .conversions
                    .iter()
                    .map(|conversion| ResultView {
                        conversion_id: conversion.id,
                        label: conversion.label.clone(),
                        source_unit_symbol: conversion.source_unit_symbol.clone(),
                        destination_unit_symbol: conversion.destination_unit_symbol.clone(),
                        formatted_value: self.formatted_result(conversion),
                        is_copied: self.highlighted_conversion_id == Some(conversion.id),
                    })
                    .collect(),
            })
            .collect();

        SessionView {
            raw_input: self.raw_input.clone(),
            numeric_value: self.numeric_value(),
            highlighted_conversion_id: self.highlighted_conversion_id,
            categories,
        }
    }
}
