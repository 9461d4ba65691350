//! Static conversion catalog.
//!
//! # Responsibility
//! - Supply the ordered categories and conversions that drive the display.
//! - Resolve conversion ids received as text from FFI/CLI callers.
//!
//! # Invariants
//! - The catalog is built once per process and is identical across calls.
//! - Category and conversion order is display order.

pub mod builtin;

pub use builtin::{find_conversion, get_catalog, parse_conversion_id, CatalogError};
