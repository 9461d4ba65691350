//! Conversion domain model.
//!
//! # Responsibility
//! - Define the immutable records the catalog is built from.
//! - Keep numeric transforms as plain data so catalogs stay serializable.
//!
//! # Invariants
//! - Every conversion and category is identified by a stable UUID.
//! - Transforms are pure and total over `f64`.

pub mod conversion;
