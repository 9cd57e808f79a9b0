//! Primitive types
//!
//! This module defines low-level primitive types used by address and
//! prefix handling code.
//!
//! Primitives are simple, fixed-size, dependency-free building blocks that
//! provide well-defined semantics and predictable behavior. They are
//! intentionally minimal and do not attempt to replicate full standard
//! library abstractions or full-featured big-integer libraries.
//!
//! Current primitives include:
//! - `U128`: a fixed-size 128-bit unsigned integer built from two 64-bit
//!   halves, with MSB-first bit numbering for prefix-mask work
//!
//! Additional primitives and conversion utilities may be added as
//! consumers require them.

mod u128;

/// Fixed-size unsigned integer primitives.
///
/// This type is re-exported as the primary 128-bit integer used by
/// address-manipulation code.
pub use u128::U128;
