//! 128-bit unsigned integer primitive
//!
//! This module defines the `U128` type, a fixed-size 128-bit unsigned
//! integer built from two 64-bit halves.
//!
//! `U128` is designed as a low-level primitive rather than a full
//! big-integer abstraction. It provides only the set of functionality
//! required by address-manipulation code, with explicit semantics and
//! predictable behavior.
//!
//! Typical use cases include:
//! - IPv6 address values
//! - CIDR-style prefix masks
//! - increment/decrement over address ranges
//!
//! Bits are numbered from the most significant end: bit 0 is the top bit
//! of the high half and bit 127 is the bottom bit of the low half. This
//! convention is load-bearing for prefix-length logic and remains stable
//! across all operations and conversions.

mod conv;
mod core;
mod ops;

/// Fixed-size 128-bit unsigned integer.
///
/// This type is re-exported as the primary 128-bit integer primitive.
pub use self::core::U128;
