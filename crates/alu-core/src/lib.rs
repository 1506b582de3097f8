//! Bit-exact reference model of a 32-bit combinational ALU.

/// Caller-contract and vector-format error types.
pub mod error;
pub use error::{AluError, VectorParseError, VectorParseErrorKind};

/// 3-bit opcode model and single source-of-truth encoding table.
pub mod opcode;
pub use opcode::{Opcode, OpcodeClass, OPCODE_MASK, OPCODE_TABLE};

/// Integer literal parsing (decimal, hex, binary).
pub mod literal;
pub use literal::{parse_u32, parse_u64, parse_u8, LiteralError};

/// Out-of-domain opcode policy and check-run configuration.
pub mod config;
pub use config::{CheckConfig, OpcodePolicy};

/// Pure evaluator with its flag model and wide add/sub stages.
pub mod execute;
pub use execute::{
    add_overflow, add_wide, carry_bit, evaluate, evaluate_masked, evaluate_raw,
    evaluate_with_policy, low_word, sub_overflow, sub_wide, AluFlags, AluInput, AluOutput,
    SIGN_BIT,
};

/// Test-vector text format and equivalence-check loop.
pub mod vector;
pub use vector::{
    check_vectors, format_vectors, parse_vectors, CheckReport, CheckSummary, TestVector,
    VectorOutcome, VectorResult, VECTOR_FILE_HEADER,
};

/// Literal-valued reference vectors for carry, overflow and logic cases.
pub mod reference;
pub use reference::{reference_vectors, CARRY_BOUNDARY_VECTORS, LOGIC_VECTORS, SANITY_VECTORS};

#[cfg(test)]
use proptest as _;
#[cfg(test)]
use rstest as _;
