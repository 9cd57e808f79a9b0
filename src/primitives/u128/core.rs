//! 128-bit unsigned integer primitive
//!
//! This module defines a fixed-size 128-bit unsigned integer type (`U128`)
//! used by address and prefix handling code.
//!
//! It is designed as a **simple, explicit value type**, not as a full
//! big-integer arithmetic library. Its primary use cases include:
//! - IPv6 address values
//! - CIDR-style prefix masks
//! - walking address ranges one value at a time
//!
//! The internal representation is two 64-bit halves, which keeps every
//! operation a handful of word-level instructions and maps directly onto
//! the hextet layout of IPv6 addresses.

/// Fixed-size 128-bit unsigned integer.
///
/// The value is stored as two `u64` halves: `hi` holds the most
/// significant 64 bits and `lo` the least significant 64 bits.
///
/// When the methods below mention a bit number, **bit 0 is the most
/// significant bit** (the top bit of `hi`) and **bit 127 is the lowest**
/// (the bottom bit of `lo`). Prefix-length logic depends on this
/// MSB-first numbering; it is deliberate and must not be flipped to the
/// more common LSB-first convention.
///
/// Every operation is a pure function producing a new value, so values
/// may be shared freely across threads. The single exception is
/// [`halves`](U128::halves), which hands out mutable access to the
/// underlying words; callers using it on shared storage are responsible
/// for their own synchronization.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct U128 {
    pub(crate) hi: u64,
    pub(crate) lo: u64,
}

impl U128 {
    /// The value zero.
    pub const ZERO: Self = Self::new(0, 0);

    /// The value one.
    pub const ONE: Self = Self::new(0, 1);

    /// The maximum representable value (2¹²⁸ − 1).
    pub const MAX: Self = Self::new(u64::MAX, u64::MAX);

    /// Assembles a value from its two 64-bit halves.
    ///
    /// `hi` supplies the most significant 64 bits and `lo` the least
    /// significant 64 bits.
    pub const fn new(hi: u64, lo: u64) -> Self {
        U128 { hi, lo }
    }

    /// Returns the most significant 64 bits.
    pub const fn hi(self) -> u64 {
        self.hi
    }

    /// Returns the least significant 64 bits.
    pub const fn lo(self) -> u64 {
        self.lo
    }

    /// Returns a bitmask with the topmost `n` bits of a 128-bit number
    /// set, as used for IPv6 CIDR prefix lengths.
    ///
    /// `mask6(0)` is all-zero and `mask6(128)` is all-ones.
    ///
    /// Each half is produced by a single shift of `u64::MAX`; the checked
    /// shifts collapse the out-of-half-range cases (`n >= 64` for `hi`,
    /// `n <= 64` for `lo`) to the saturated word instead of a masked
    /// shift count.
    ///
    /// # Caller obligation
    /// `n` must be in `0..=128`. Larger values are a caller bug: the
    /// `128 - n` shift count underflows and panics in debug builds.
    pub const fn mask6(n: u32) -> Self {
        let hi = match u64::MAX.checked_shr(n) {
            Some(unset) => !unset,
            None => u64::MAX,
        };
        let lo = match u64::MAX.checked_shl(128 - n) {
            Some(set) => set,
            None => 0,
        };

        U128 { hi, lo }
    }

    /// Reports whether the value is zero.
    ///
    /// Computed as a single OR-then-test over the two halves, which
    /// compiles to branch-free code.
    pub const fn is_zero(self) -> bool {
        self.hi | self.lo == 0
    }

    /// Returns the value plus one, wrapping modulo 2¹²⁸.
    ///
    /// The carry out of the low half propagates into the high half;
    /// `MAX.add_one()` yields zero. Wraparound is defined behavior, not
    /// an error.
    pub const fn add_one(self) -> Self {
        let (lo, carry) = self.lo.overflowing_add(1);

        U128 {
            hi: self.hi.wrapping_add(carry as u64),
            lo,
        }
    }

    /// Returns the value minus one, wrapping modulo 2¹²⁸.
    ///
    /// The borrow out of the low half propagates into the high half;
    /// `ZERO.sub_one()` yields all-ones. Wraparound is defined behavior,
    /// not an error.
    pub const fn sub_one(self) -> Self {
        let (lo, borrow) = self.lo.overflowing_sub(1);

        U128 {
            hi: self.hi.wrapping_sub(borrow as u64),
            lo,
        }
    }

    /// Exposes the two 64-bit halves as mutable references, ordered
    /// `[high, low]`.
    ///
    /// This is a narrow escape hatch for low-level callers that need to
    /// read or overwrite the underlying words in place (e.g. platform
    /// fast paths that treat the value as raw words). It bypasses the
    /// pure-value discipline of every other operation, so a caller
    /// mutating shared storage through it must provide its own
    /// synchronization.
    pub fn halves(&mut self) -> [&mut u64; 2] {
        [&mut self.hi, &mut self.lo]
    }

    /// Returns a copy with the given bit and all subsequent (less
    /// significant) ones set, leaving earlier bits unchanged.
    ///
    /// `bit` is MSB-first, in `0..=128`; `bits_set_from(0)` is all-ones
    /// and `bits_set_from(128)` returns the value unchanged. Used to
    /// compute the last address of a prefix.
    pub fn bits_set_from(self, bit: u32) -> Self {
        self | !Self::mask6(bit)
    }

    /// Returns a copy with the given bit and all subsequent (less
    /// significant) ones cleared, leaving earlier bits unchanged.
    ///
    /// `bit` is MSB-first, in `0..=128`; `bits_cleared_from(0)` is zero
    /// and `bits_cleared_from(128)` returns the value unchanged. Used to
    /// compute the first address of a prefix.
    pub fn bits_cleared_from(self, bit: u32) -> Self {
        self & Self::mask6(bit)
    }
}
