//! Status flags and the evaluator output record.

use std::fmt;

const ZERO_BIT: u8 = 0b100;
const CARRY_BIT: u8 = 0b010;
const OVERFLOW_BIT: u8 = 0b001;

/// Status flags produced alongside every result.
///
/// `carry_out` and `overflow` are only ever set by ADD and SUB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AluFlags {
    /// Result is all-zero bits.
    pub zero: bool,
    /// Carry out of bit 31 (ADD) or borrow (SUB).
    pub carry_out: bool,
    /// Two's-complement signed overflow (ADD/SUB).
    pub overflow: bool,
}

impl AluFlags {
    /// Packs the flags as `Z C V` from bit 2 down to bit 0.
    #[must_use]
    pub const fn bits(self) -> u8 {
        let mut bits = 0;
        if self.zero {
            bits |= ZERO_BIT;
        }
        if self.carry_out {
            bits |= CARRY_BIT;
        }
        if self.overflow {
            bits |= OVERFLOW_BIT;
        }
        bits
    }

    /// Unpacks flags from `Z C V` bit order. Bits above bit 2 are rejected.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !(ZERO_BIT | CARRY_BIT | OVERFLOW_BIT) != 0 {
            return None;
        }

        Some(Self {
            zero: bits & ZERO_BIT != 0,
            carry_out: bits & CARRY_BIT != 0,
            overflow: bits & OVERFLOW_BIT != 0,
        })
    }
}

impl fmt::Display for AluFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z={} C={} V={}",
            u8::from(self.zero),
            u8::from(self.carry_out),
            u8::from(self.overflow)
        )
    }
}

/// Complete output of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AluOutput {
    /// Low 32 bits of the operation's mathematical result.
    pub result: u32,
    /// Status flags.
    pub flags: AluFlags,
}

impl AluOutput {
    /// Zero flag.
    #[must_use]
    pub const fn zero(self) -> bool {
        self.flags.zero
    }

    /// Carry/borrow flag.
    #[must_use]
    pub const fn carry_out(self) -> bool {
        self.flags.carry_out
    }

    /// Signed overflow flag.
    #[must_use]
    pub const fn overflow(self) -> bool {
        self.flags.overflow
    }

    /// Returns `(result, zero, carry_out, overflow)`.
    #[must_use]
    pub const fn into_tuple(self) -> (u32, bool, bool, bool) {
        (
            self.result,
            self.flags.zero,
            self.flags.carry_out,
            self.flags.overflow,
        )
    }
}

impl fmt::Display for AluOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X} {}", self.result, self.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::{AluFlags, AluOutput};

    #[test]
    fn default_flags_are_clear() {
        assert_eq!(AluFlags::default().bits(), 0);
    }

    #[test]
    fn packing_uses_zcv_order() {
        let flags = AluFlags {
            zero: true,
            carry_out: false,
            overflow: true,
        };
        assert_eq!(flags.bits(), 0b101);
        for bits in 0..=0b111 {
            assert_eq!(AluFlags::from_bits(bits).map(AluFlags::bits), Some(bits));
        }
        assert_eq!(AluFlags::from_bits(0b1000), None);
    }

    #[test]
    fn output_renders_hex_result_and_flags() {
        let output = AluOutput {
            result: 0x8000_0000,
            flags: AluFlags {
                zero: false,
                carry_out: false,
                overflow: true,
            },
        };
        assert_eq!(output.to_string(), "0x80000000 Z=0 C=0 V=1");
        assert_eq!(output.into_tuple(), (0x8000_0000, false, false, true));
    }
}
