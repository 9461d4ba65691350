//! Built-in reference catalog: temperature, length, weight and speed.

use crate::model::conversion::{Category, ConversionDefinition, ConversionId, Transform};
use log::debug;
use once_cell::sync::Lazy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const FEET_PER_METER: f64 = 3.28084;
const MILES_PER_KILOMETER: f64 = 0.621371;
const POUNDS_PER_KILOGRAM: f64 = 2.20462;

static CATALOG: Lazy<Vec<Category>> = Lazy::new(|| {
    let catalog = build_catalog();
    debug!(
        "event=catalog_built module=catalog status=ok categories={} conversions={}",
        catalog.len(),
        catalog
            .iter()
            .map(|category| category.conversions.len())
            .sum::<usize>()
    );
    catalog
});

/// Returns the ordered reference catalog.
///
/// Deterministic and side-effect-free; every call returns the same slice.
pub fn get_catalog() -> &'static [Category] {
    CATALOG.as_slice()
}

/// Finds one conversion definition by id.
pub fn find_conversion(id: ConversionId) -> Option<&'static ConversionDefinition> {
    get_catalog()
        .iter()
        .flat_map(|category| category.conversions.iter())
        .find(|conversion| conversion.id == id)
}

/// Parses a conversion id from text and checks that the catalog knows it.
///
/// # Errors
/// - `EmptyId` when `value` is blank.
/// - `InvalidId` when `value` is not a UUID.
/// - `UnknownConversion` when no catalog entry has this id.
pub fn parse_conversion_id(value: &str) -> Result<ConversionId, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyId);
    }
    let id = Uuid::parse_str(trimmed).map_err(|_| CatalogError::InvalidId(trimmed.to_string()))?;
    if find_conversion(id).is_none() {
        return Err(CatalogError::UnknownConversion(id));
    }
    Ok(id)
}

/// Conversion id resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    EmptyId,
    InvalidId(String),
    UnknownConversion(ConversionId),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyId => write!(f, "conversion id must not be empty"),
            Self::InvalidId(value) => write!(f, "conversion id is not a valid uuid: {value}"),
            Self::UnknownConversion(id) => write!(f, "conversion not found: {id}"),
        }
    }
}

impl Error for CatalogError {}

fn build_catalog() -> Vec<Category> {
    vec![
        Category::new(
            "temperature",
            "Temperature",
            "thermometer.medium",
            vec![
                ConversionDefinition::new(
                    "temperature.celsius_to_fahrenheit",
                    "Celsius to Fahrenheit",
                    "°C",
                    "°F",
                    Transform::CelsiusToFahrenheit,
                ),
                ConversionDefinition::new(
                    "temperature.fahrenheit_to_celsius",
                    "Fahrenheit to Celsius",
                    "°F",
                    "°C",
                    Transform::FahrenheitToCelsius,
                ),
            ],
        ),
        Category::new(
            "length",
            "Length",
            "ruler",
            vec![
                ConversionDefinition::new(
                    "length.meters_to_feet",
                    "Meters to Feet",
                    "m",
                    "ft",
                    Transform::Multiply(FEET_PER_METER),
                ),
                ConversionDefinition::new(
                    "length.feet_to_meters",
                    "Feet to Meters",
                    "ft",
                    "m",
                    Transform::Divide(FEET_PER_METER),
                ),
                ConversionDefinition::new(
                    "length.miles_to_km",
                    "Miles to KM",
                    "mi",
                    "km",
                    Transform::Divide(MILES_PER_KILOMETER),
                ),
            ],
        ),
        Category::new(
            "weight",
            "Weight",
            "scalemass",
            vec![
                ConversionDefinition::new(
                    "weight.kg_to_lbs",
                    "KG to Lbs",
                    "kg",
                    "lbs",
                    Transform::Multiply(POUNDS_PER_KILOGRAM),
                ),
                ConversionDefinition::new(
                    "weight.lbs_to_kg",
                    "Lbs to KG",
                    "lbs",
                    "kg",
                    Transform::Divide(POUNDS_PER_KILOGRAM),
                ),
            ],
        ),
        Category::new(
            "speed",
            "Speed",
            "wind",
            vec![
                ConversionDefinition::new(
                    "speed.kmh_to_mph",
                    "KM/H to MPH",
                    "km/h",
                    "mph",
                    Transform::Multiply(MILES_PER_KILOMETER),
                ),
                ConversionDefinition::new(
                    "speed.mph_to_kmh",
                    "MPH to KM/H",
                    "mph",
                    "km/h",
                    Transform::Divide(MILES_PER_KILOMETER),
                ),
            ],
        ),
    ]
}
