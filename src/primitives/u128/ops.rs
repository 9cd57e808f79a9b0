//! Bitwise operations for `U128`
//!
//! This module implements the bitwise operator traits for the `U128`
//! type.
//!
//! The goal is **not** to provide a full big-integer library, but to
//! supply only the operations that prefix-mask and address-manipulation
//! code requires:
//! - masking and combining (AND, OR, XOR)
//! - complement (NOT), for turning a prefix mask into a host mask
//!
//! All operations act independently on the two 64-bit halves, with no
//! heap allocation and no cross-half interaction.

use crate::primitives::u128::U128;
use std::ops::{BitAnd, BitOr, BitXor, Not};

/// Bitwise AND between two 128-bit values.
impl BitAnd<U128> for U128 {
    type Output = U128;

    fn bitand(self, rhs: U128) -> Self::Output {
        U128 {
            hi: self.hi & rhs.hi,
            lo: self.lo & rhs.lo,
        }
    }
}

/// Bitwise OR between two 128-bit values.
impl BitOr<U128> for U128 {
    type Output = U128;

    fn bitor(self, rhs: U128) -> Self::Output {
        U128 {
            hi: self.hi | rhs.hi,
            lo: self.lo | rhs.lo,
        }
    }
}

/// Bitwise XOR between two 128-bit values.
impl BitXor<U128> for U128 {
    type Output = U128;

    fn bitxor(self, rhs: U128) -> Self::Output {
        U128 {
            hi: self.hi ^ rhs.hi,
            lo: self.lo ^ rhs.lo,
        }
    }
}

/// Bitwise complement of a 128-bit value.
impl Not for U128 {
    type Output = U128;

    fn not(self) -> Self::Output {
        U128 {
            hi: !self.hi,
            lo: !self.lo,
        }
    }
}
