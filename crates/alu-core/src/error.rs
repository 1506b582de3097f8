use thiserror::Error;

/// Caller-contract violations at the evaluator boundary.
///
/// Every in-domain input has a defined result, so these only arise when a raw
/// opcode value or mnemonic from outside the 3-bit domain is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum AluError {
    /// Raw opcode value does not fit the 3-bit opcode bus.
    #[error("opcode {0} is outside the 3-bit domain (0..=7)")]
    OpcodeOutOfRange(u8),
    /// Mnemonic does not name any of the eight operations.
    #[error("unknown opcode mnemonic")]
    UnknownOpcode,
}

impl AluError {
    /// Returns the offending raw opcode value, if the error carries one.
    #[must_use]
    pub const fn raw_opcode(self) -> Option<u8> {
        match self {
            Self::OpcodeOutOfRange(value) => Some(value),
            Self::UnknownOpcode => None,
        }
    }
}

/// Classification of a vector-file parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorParseErrorKind {
    /// Line did not have exactly seven fields.
    #[error("expected 7 fields (a b op result z c v), found {found}")]
    FieldCount {
        /// Number of fields actually present.
        found: usize,
    },
    /// Field is not a decimal, `0x` hex, or `0b` binary literal.
    #[error("invalid integer literal '{0}'")]
    InvalidLiteral(String),
    /// Literal parsed but does not fit the field width.
    #[error("literal '{0}' does not fit in {1} bits")]
    LiteralOutOfRange(String, u32),
    /// Opcode field is neither a mnemonic nor an integer literal.
    #[error("invalid opcode '{0}'")]
    InvalidOpcode(String),
    /// Flag field is not `0` or `1`.
    #[error("invalid flag '{0}' (expected 0 or 1)")]
    InvalidFlag(String),
}

/// Vector-file parse failure with its source position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind} (in '{text}')")]
pub struct VectorParseError {
    /// 1-indexed line number.
    pub line: usize,
    /// The offending line with comments stripped.
    pub text: String,
    /// What went wrong.
    pub kind: VectorParseErrorKind,
}

#[cfg(test)]
mod tests {
    use super::{AluError, VectorParseError, VectorParseErrorKind};

    #[test]
    fn out_of_range_error_reports_raw_value() {
        assert_eq!(AluError::OpcodeOutOfRange(9).raw_opcode(), Some(9));
        assert_eq!(AluError::UnknownOpcode.raw_opcode(), None);
    }

    #[test]
    fn messages_name_the_offending_input() {
        assert_eq!(
            AluError::OpcodeOutOfRange(12).to_string(),
            "opcode 12 is outside the 3-bit domain (0..=7)"
        );

        let error = VectorParseError {
            line: 4,
            text: "1 2 ADD".to_string(),
            kind: VectorParseErrorKind::FieldCount { found: 3 },
        };
        assert_eq!(
            error.to_string(),
            "line 4: expected 7 fields (a b op result z c v), found 3 (in '1 2 ADD')"
        );
    }
}
