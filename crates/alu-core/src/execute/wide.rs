//! One-bit-wider add/sub stages for carry and overflow derivation.
//!
//! Each stage computes in a `u64` so bit 32 is the carry (or borrow) out of
//! bit 31, and the low 32 bits are the wrapped result.

#![allow(clippy::cast_possible_truncation, clippy::cast_lossless)]

/// Sign bit of a 32-bit two's-complement value.
pub const SIGN_BIT: u32 = 1 << 31;

const CARRY_BIT: u64 = 1 << 32;

/// Widened `a + b`. Bit 32 holds the carry out of bit 31.
#[must_use]
pub const fn add_wide(a: u32, b: u32) -> u64 {
    a as u64 + b as u64
}

/// Widened `a - b`. Bit 32 is set iff a borrow occurred (`a < b`).
#[must_use]
pub const fn sub_wide(a: u32, b: u32) -> u64 {
    (a as u64).wrapping_sub(b as u64)
}

/// Low 32 bits of a widened intermediate.
#[must_use]
pub const fn low_word(wide: u64) -> u32 {
    wide as u32
}

/// Bit 32 of a widened intermediate.
#[must_use]
pub const fn carry_bit(wide: u64) -> bool {
    wide & CARRY_BIT != 0
}

/// Signed overflow for `a + b = result`: operands agree in sign and the
/// result does not.
#[must_use]
pub const fn add_overflow(a: u32, b: u32, result: u32) -> bool {
    (a ^ result) & (b ^ result) & SIGN_BIT != 0
}

/// Signed overflow for `a - b = result`: operands differ in sign and the
/// result's sign differs from `a`.
#[must_use]
pub const fn sub_overflow(a: u32, b: u32, result: u32) -> bool {
    (a ^ b) & (a ^ result) & SIGN_BIT != 0
}
