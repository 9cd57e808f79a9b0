//! Conversions between `U128` and 64-bit integer representations
//!
//! This module defines explicit conversions between the fixed-size `U128`
//! type and 64-bit integer forms: the scalar `u64` and the `[u64; 2]`
//! half pair.
//!
//! Array conversions use `[hi, lo]` order, matching the order in which
//! [`halves`](crate::primitives::U128::halves) exposes the words.

use crate::primitives::U128;

/// Converts a `u64` into a `U128`.
///
/// The value is placed in the least significant half, with the high half
/// set to zero.
impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        U128::new(0, value)
    }
}

/// Attempts to convert a `U128` into a `u64`.
///
/// The conversion succeeds only if the upper 64 bits of the value are
/// zero. Otherwise, an error is returned to signal that the value does
/// not fit into a 64-bit integer.
impl TryFrom<U128> for u64 {
    type Error = ();

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.hi != 0 {
            return Err(());
        }

        Ok(value.lo)
    }
}

/// Converts a `[hi, lo]` half pair into a `U128`.
impl From<[u64; 2]> for U128 {
    fn from(value: [u64; 2]) -> Self {
        U128::new(value[0], value[1])
    }
}

/// Splits a `U128` into its `[hi, lo]` half pair.
impl From<U128> for [u64; 2] {
    fn from(value: U128) -> Self {
        [value.hi, value.lo]
    }
}
