//! Fixed-size integer primitives for network addressing
//!
//! This crate provides the low-level integer building blocks used by
//! address and prefix handling code (IPv6 addresses, CIDR-style prefix
//! masks).
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level numeric API. All components
//! are dependency-free and explicit in their semantics.
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-size, low-level integer primitives such as `U128`. These types
//!   provide explicit, predictable semantics and are used as fundamental
//!   building blocks by address-manipulation code.
//!
//! # Design goals
//!
//! - No heap allocations
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics
//! - No runtime dependencies
//!
//! This crate is not intended to replace full-featured big-integer
//! libraries, but to serve as a small, controlled foundation for
//! addressing code.

pub mod primitives;
