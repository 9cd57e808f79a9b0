//! Conversions between `U128` and the native 128-bit integer
//!
//! This module defines the lossless conversions between the two-half
//! `U128` representation and Rust's native `u128`.
//!
//! These conversions exist for interoperability at the crate boundary
//! (e.g. `Ipv6Addr::to_bits` style values); internal operations work on
//! the halves directly.

use crate::primitives::U128;

/// Converts a native `u128` into its two 64-bit halves.
impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        U128::new((value >> 64) as u64, value as u64)
    }
}

/// Reassembles a native `u128` from the two 64-bit halves.
impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        ((value.hi as u128) << 64) | value.lo as u128
    }
}
