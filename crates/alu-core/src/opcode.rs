//! Opcode model for the 3-bit ALU operation selector.

use std::fmt;
use std::str::FromStr;

use crate::error::AluError;

/// Mask selecting the three opcode bits.
pub const OPCODE_MASK: u8 = 0b111;

/// Operations selected by the 3-bit opcode bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[repr(u8)]
pub enum Opcode {
    /// Wrapping 32-bit addition with carry and signed overflow.
    Add = 0b000,
    /// Wrapping 32-bit subtraction with borrow and signed overflow.
    Sub = 0b001,
    /// Bitwise AND.
    And = 0b010,
    /// Bitwise OR.
    Or = 0b011,
    /// Bitwise XOR.
    Xor = 0b100,
    /// Bitwise NAND.
    Nand = 0b101,
    /// Bitwise complement of A; B is ignored.
    Not = 0b110,
    /// A passed through unchanged; B is ignored.
    PassA = 0b111,
}

/// Coarse grouping of opcodes by the datapath they exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum OpcodeClass {
    /// ADD/SUB: the carry chain, the only source of carry and overflow.
    Arithmetic,
    /// Bitwise two-operand or complement logic.
    Logic,
    /// Operand A routed straight to the result.
    Pass,
}

/// Single source-of-truth opcode table.
///
/// Every 3-bit value appears exactly once; there is no reserved encoding.
pub const OPCODE_TABLE: [(u8, Opcode); 8] = [
    (0b000, Opcode::Add),
    (0b001, Opcode::Sub),
    (0b010, Opcode::And),
    (0b011, Opcode::Or),
    (0b100, Opcode::Xor),
    (0b101, Opcode::Nand),
    (0b110, Opcode::Not),
    (0b111, Opcode::PassA),
];

impl Opcode {
    /// All operations in encoding order.
    pub const ALL: [Self; 8] = [
        Self::Add,
        Self::Sub,
        Self::And,
        Self::Or,
        Self::Xor,
        Self::Nand,
        Self::Not,
        Self::PassA,
    ];

    /// Converts a 3-bit value into an opcode. Values above 7 yield `None`.
    #[must_use]
    pub const fn from_u3(value: u8) -> Option<Self> {
        match value {
            0b000 => Some(Self::Add),
            0b001 => Some(Self::Sub),
            0b010 => Some(Self::And),
            0b011 => Some(Self::Or),
            0b100 => Some(Self::Xor),
            0b101 => Some(Self::Nand),
            0b110 => Some(Self::Not),
            0b111 => Some(Self::PassA),
            _ => None,
        }
    }

    /// Converts any byte into an opcode by keeping only its low three bits.
    #[must_use]
    pub const fn from_masked(value: u8) -> Self {
        match value & OPCODE_MASK {
            0b000 => Self::Add,
            0b001 => Self::Sub,
            0b010 => Self::And,
            0b011 => Self::Or,
            0b100 => Self::Xor,
            0b101 => Self::Nand,
            0b110 => Self::Not,
            _ => Self::PassA,
        }
    }

    /// Returns the 3-bit encoding.
    #[must_use]
    pub const fn as_u3(self) -> u8 {
        self as u8
    }

    /// Canonical upper-case mnemonic.
    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nand => "NAND",
            Self::Not => "NOT",
            Self::PassA => "PASS",
        }
    }

    /// Resolves a mnemonic, ignoring ASCII case.
    ///
    /// `PASSA` and `PASS_A` are accepted as aliases for `PASS`.
    #[must_use]
    pub fn from_mnemonic(text: &str) -> Option<Self> {
        let upper = text.trim().to_ascii_uppercase();
        match upper.as_str() {
            "PASSA" | "PASS_A" => Some(Self::PassA),
            other => Self::ALL
                .into_iter()
                .find(|opcode| opcode.mnemonic() == other),
        }
    }

    /// Returns the datapath class for this opcode.
    #[must_use]
    pub const fn class(self) -> OpcodeClass {
        match self {
            Self::Add | Self::Sub => OpcodeClass::Arithmetic,
            Self::And | Self::Or | Self::Xor | Self::Nand | Self::Not => OpcodeClass::Logic,
            Self::PassA => OpcodeClass::Pass,
        }
    }

    /// Returns false for the single-operand operations (`NOT`, `PASS`).
    #[must_use]
    pub const fn uses_operand_b(self) -> bool {
        !matches!(self, Self::Not | Self::PassA)
    }

    /// Returns true if carry-out and overflow carry meaning for this opcode.
    #[must_use]
    pub const fn drives_carry_flags(self) -> bool {
        matches!(self.class(), OpcodeClass::Arithmetic)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

impl TryFrom<u8> for Opcode {
    type Error = AluError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u3(value).ok_or(AluError::OpcodeOutOfRange(value))
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode.as_u3()
    }
}

impl FromStr for Opcode {
    type Err = AluError;

    /// Accepts a mnemonic or a numeric literal (decimal, `0x`, `0b`).
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if let Some(opcode) = Self::from_mnemonic(text) {
            return Ok(opcode);
        }

        let value = crate::literal::parse_u8(text.trim()).map_err(|_| AluError::UnknownOpcode)?;
        Self::try_from(value)
    }
}
