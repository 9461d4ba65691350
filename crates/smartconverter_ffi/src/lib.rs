//! Flutter-facing bindings for the SmartConverter core.

pub mod api;
