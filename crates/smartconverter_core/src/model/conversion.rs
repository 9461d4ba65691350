//! Conversion definitions and numeric transforms.
//!
//! # Responsibility
//! - Describe one unit conversion (label, units, transform) and the category
//!   that groups it for display.
//! - Derive stable identifiers from dotted slugs.
//!
//! # Invariants
//! - `ConversionId` values are UUID v5 in `CONVERSION_ID_NAMESPACE`, so the
//!   same slug always yields the same id across processes.
//! - `Transform::apply` evaluates left to right exactly as the reference
//!   formulas are written; it never reorders operations.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for all slug-derived catalog ids.
pub const CONVERSION_ID_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a3e_9b4d_5e60_8a71_c2d3_e4f5_0617);

/// Stable identifier of one conversion definition.
pub type ConversionId = Uuid;

/// Stable identifier of one catalog category.
pub type CategoryId = Uuid;

/// Derives a stable id from a dotted slug such as `length.meters_to_feet`.
pub fn slug_id(slug: &str) -> Uuid {
    Uuid::new_v5(&CONVERSION_ID_NAMESPACE, slug.as_bytes())
}

/// Closed set of numeric transforms used by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "value", rename_all = "snake_case")]
pub enum Transform {
    /// `x * factor`
    Multiply(f64),
    /// `x / divisor`
    Divide(f64),
    /// `x * 9 / 5 + 32`
    CelsiusToFahrenheit,
    /// `(x - 32) * 5 / 9`
    FahrenheitToCelsius,
}

impl Transform {
    /// Applies the transform to one source-unit value.
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Multiply(factor) => value * factor,
            Self::Divide(divisor) => value / divisor,
            Self::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
            Self::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
        }
    }
}

/// One convertible pair of units shown as a result card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionDefinition {
    /// Stable id used for copy/highlight tracking.
    pub id: ConversionId,
    /// Human-readable card title, e.g. `Meters to Feet`.
    pub label: String,
    /// Symbol of the input unit, e.g. `m`.
    pub source_unit_symbol: String,
    /// Symbol of the output unit, e.g. `ft`.
    pub destination_unit_symbol: String,
    pub transform: Transform,
}

impl ConversionDefinition {
    /// Builds a definition whose id is derived from `slug`.
    pub fn new(
        slug: &str,
        label: impl Into<String>,
        source_unit_symbol: impl Into<String>,
        destination_unit_symbol: impl Into<String>,
        transform: Transform,
    ) -> Self {
        Self {
            id: slug_id(slug),
            label: label.into(),
            source_unit_symbol: source_unit_symbol.into(),
            destination_unit_symbol: destination_unit_symbol.into(),
            transform,
        }
    }

    /// Converts one source-unit value.
    pub fn convert(&self, value: f64) -> f64 {
        self.transform.apply(value)
    }
}

/// Display group of conversions (Temperature, Length, ...).
///
/// `conversions` order is display order and is significant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub title: String,
    /// Opaque icon reference resolved by the UI shell.
    pub icon_id: String,
    pub conversions: Vec<ConversionDefinition>,
}

impl Category {
    /// Builds a category whose id is derived from `slug`.
    pub fn new(
        slug: &str,
        title: impl Into<String>,
        icon_id: impl Into<String>,
        conversions: Vec<ConversionDefinition>,
    ) -> Self {
        Self {
            id: slug_id(slug),
            title: title.into(),
            icon_id: icon_id.into(),
            conversions,
        }
    }
}
