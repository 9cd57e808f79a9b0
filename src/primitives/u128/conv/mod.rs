//! Integer conversion utilities
//!
//! This module groups explicit conversion implementations between the
//! fixed-size `U128` primitive and native integer types.
//!
//! Each submodule is responsible for conversions to and from a specific
//! integer width, following these principles:
//! - explicit half ordering (`hi` first, then `lo`)
//! - no implicit truncation
//! - fallible conversions when narrowing may lose information
//! - simple, auditable implementations

mod u64;
mod u128;
