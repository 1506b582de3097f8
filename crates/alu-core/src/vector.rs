//! Line-oriented test-vector format and the equivalence-check loop.
//!
//! ## Format
//!
//! One vector per line, seven whitespace-separated fields:
//!
//! ```text
//! # a        b          op   result     z c v
//! 0xFFFFFFFF 0x00000001 ADD  0x00000000 1 1 0
//! ```
//!
//! - `#` starts a comment to end of line; blank lines are skipped.
//! - Integers are decimal, `0x` hex, or `0b` binary with optional `_`.
//! - `op` is a mnemonic (any case) or an integer 0..=255. Values above 7 are
//!   kept as-is so the check loop can apply the configured opcode policy.
//! - Flags are `0` or `1`.

#![allow(clippy::module_name_repetitions)]

use std::fmt;
use std::fmt::Write as _;

use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::error::{AluError, VectorParseError, VectorParseErrorKind};
use crate::execute::{evaluate_with_policy, AluFlags, AluOutput};
use crate::literal::{parse_u32, parse_u8, LiteralError};
use crate::opcode::Opcode;

/// Header comment written above formatted vectors.
pub const VECTOR_FILE_HEADER: &str = "# a        b          op   result     z c v";

/// A single stimulus with its expected response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct TestVector {
    /// 1-indexed source line, or 0 for vectors built in code.
    pub line: usize,
    /// Operand A.
    pub a: u32,
    /// Operand B.
    pub b: u32,
    /// Raw opcode value as presented on the bus (may exceed 3 bits).
    pub opcode: u8,
    /// Expected result and flags.
    pub expected: AluOutput,
}

impl TestVector {
    /// Builds an in-domain vector from expected result and `Z C V` flags.
    #[must_use]
    pub const fn new(
        a: u32,
        b: u32,
        opcode: Opcode,
        result: u32,
        zero: bool,
        carry_out: bool,
        overflow: bool,
    ) -> Self {
        Self {
            line: 0,
            a,
            b,
            opcode: opcode.as_u3(),
            expected: AluOutput {
                result,
                flags: AluFlags {
                    zero,
                    carry_out,
                    overflow,
                },
            },
        }
    }

    /// Returns the decoded opcode when the raw value is in domain.
    #[must_use]
    pub const fn decoded_opcode(&self) -> Option<Opcode> {
        Opcode::from_u3(self.opcode)
    }
}

impl fmt::Display for TestVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self
            .decoded_opcode()
            .map_or_else(|| self.opcode.to_string(), |op| op.mnemonic().to_string());
        write!(
            f,
            "0x{:08X} 0x{:08X} {:<4} 0x{:08X} {} {} {}",
            self.a,
            self.b,
            op,
            self.expected.result,
            u8::from(self.expected.flags.zero),
            u8::from(self.expected.flags.carry_out),
            u8::from(self.expected.flags.overflow)
        )
    }
}

/// Parses vector-file content.
///
/// # Errors
///
/// Returns the first line that fails to parse, with its line number.
pub fn parse_vectors(content: &str) -> Result<Vec<TestVector>, VectorParseError> {
    let mut vectors = Vec::new();

    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let stripped = strip_comment(raw_line).trim();

        if stripped.is_empty() {
            continue;
        }

        let mut vector = parse_vector_line(stripped).map_err(|kind| VectorParseError {
            line,
            text: stripped.to_string(),
            kind,
        })?;
        vector.line = line;
        vectors.push(vector);
    }

    Ok(vectors)
}

/// Formats vectors in the file format, preceded by a header comment.
#[must_use]
pub fn format_vectors(vectors: &[TestVector]) -> String {
    let mut out = String::from(VECTOR_FILE_HEADER);
    out.push('\n');
    for vector in vectors {
        let _ = writeln!(out, "{vector}");
    }
    out
}

fn strip_comment(line: &str) -> &str {
    line.find('#').map_or(line, |pos| &line[..pos])
}

fn parse_vector_line(text: &str) -> Result<TestVector, VectorParseErrorKind> {
    let fields: Vec<&str> = text.split_whitespace().collect();
    let &[a, b, op, result, zero, carry_out, overflow] = fields.as_slice() else {
        return Err(VectorParseErrorKind::FieldCount {
            found: fields.len(),
        });
    };

    Ok(TestVector {
        line: 0,
        a: parse_word(a)?,
        b: parse_word(b)?,
        opcode: parse_opcode_field(op)?,
        expected: AluOutput {
            result: parse_word(result)?,
            flags: AluFlags {
                zero: parse_flag(zero)?,
                carry_out: parse_flag(carry_out)?,
                overflow: parse_flag(overflow)?,
            },
        },
    })
}

fn parse_word(text: &str) -> Result<u32, VectorParseErrorKind> {
    parse_u32(text).map_err(|error| match error {
        LiteralError::Invalid => VectorParseErrorKind::InvalidLiteral(text.to_string()),
        LiteralError::OutOfRange { bits } => {
            VectorParseErrorKind::LiteralOutOfRange(text.to_string(), bits)
        }
    })
}

fn parse_opcode_field(text: &str) -> Result<u8, VectorParseErrorKind> {
    if let Some(opcode) = Opcode::from_mnemonic(text) {
        return Ok(opcode.as_u3());
    }

    parse_u8(text).map_err(|error| match error {
        LiteralError::Invalid => VectorParseErrorKind::InvalidOpcode(text.to_string()),
        LiteralError::OutOfRange { bits } => {
            VectorParseErrorKind::LiteralOutOfRange(text.to_string(), bits)
        }
    })
}

fn parse_flag(text: &str) -> Result<bool, VectorParseErrorKind> {
    match text {
        "0" => Ok(false),
        "1" => Ok(true),
        other => Err(VectorParseErrorKind::InvalidFlag(other.to_string())),
    }
}

/// Outcome of checking one vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorOutcome {
    /// Actual output matched expected bit for bit.
    Pass,
    /// Evaluator output differs from the expected response.
    Mismatch {
        /// What the evaluator produced.
        actual: AluOutput,
    },
    /// Opcode was out of domain under the reject policy.
    Rejected(AluError),
}

/// A vector paired with its outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorResult {
    /// The vector that was checked.
    pub vector: TestVector,
    /// Its outcome.
    pub outcome: VectorOutcome,
}

impl VectorResult {
    /// Returns true if the vector passed.
    #[must_use]
    pub const fn passed(&self) -> bool {
        matches!(self.outcome, VectorOutcome::Pass)
    }
}

impl fmt::Display for VectorResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = &self.vector;
        match self.outcome {
            VectorOutcome::Pass => write!(f, "line {}: PASS {v}", v.line),
            VectorOutcome::Mismatch { actual } => write!(
                f,
                "line {}: FAIL {} 0x{:08X} 0x{:08X}: expected {}, got {}",
                v.line,
                v.decoded_opcode().map_or("?", Opcode::mnemonic),
                v.a,
                v.b,
                v.expected,
                actual
            ),
            VectorOutcome::Rejected(error) => write!(
                f,
                "line {}: REJECTED 0x{:08X} 0x{:08X} op={}: {error}",
                v.line, v.a, v.b, v.opcode
            ),
        }
    }
}

/// Results of a check run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CheckReport {
    /// Results in input order.
    pub results: Vec<VectorResult>,
    /// Vectors not evaluated because the run stopped early.
    pub skipped: usize,
}

impl CheckReport {
    /// Returns true if every vector was evaluated and passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.skipped == 0 && self.results.iter().all(VectorResult::passed)
    }

    /// Iterates over the results that did not pass.
    pub fn failures(&self) -> impl Iterator<Item = &VectorResult> {
        self.results.iter().filter(|result| !result.passed())
    }

    /// Returns counts for summary reporting.
    #[must_use]
    pub fn summary(&self) -> CheckSummary {
        let mut summary = CheckSummary {
            skipped: self.skipped,
            total: self.results.len() + self.skipped,
            ..CheckSummary::default()
        };
        for result in &self.results {
            match result.outcome {
                VectorOutcome::Pass => summary.passed += 1,
                VectorOutcome::Mismatch { .. } => summary.failed += 1,
                VectorOutcome::Rejected(_) => summary.rejected += 1,
            }
        }
        summary
    }
}

/// Summary counts for a check run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckSummary {
    /// Vectors whose output matched.
    pub passed: usize,
    /// Vectors whose output differed.
    pub failed: usize,
    /// Vectors rejected for an out-of-domain opcode.
    pub rejected: usize,
    /// Vectors not evaluated.
    pub skipped: usize,
    /// All vectors presented.
    pub total: usize,
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} passed, {} failed, {} rejected, {} skipped",
            self.passed, self.failed, self.rejected, self.skipped
        )
    }
}

/// Evaluates every vector and compares against its expected output.
#[must_use]
pub fn check_vectors(vectors: &[TestVector], config: &CheckConfig) -> CheckReport {
    let mut report = CheckReport::default();

    for (idx, vector) in vectors.iter().enumerate() {
        let evaluated =
            evaluate_with_policy(vector.a, vector.b, vector.opcode, config.opcode_policy);
        let outcome = match evaluated {
            Ok(actual) if actual == vector.expected => VectorOutcome::Pass,
            Ok(actual) => {
                debug!(
                    line = vector.line,
                    opcode = vector.opcode,
                    expected = %vector.expected,
                    actual = %actual,
                    "vector mismatch"
                );
                VectorOutcome::Mismatch { actual }
            }
            Err(error) => {
                debug!(line = vector.line, opcode = vector.opcode, %error, "vector rejected");
                VectorOutcome::Rejected(error)
            }
        };

        let passed = matches!(outcome, VectorOutcome::Pass);
        report.results.push(VectorResult {
            vector: *vector,
            outcome,
        });

        if config.fail_fast && !passed {
            report.skipped = vectors.len() - idx - 1;
            break;
        }
    }

    let summary = report.summary();
    info!(
        passed = summary.passed,
        failed = summary.failed,
        rejected = summary.rejected,
        skipped = summary.skipped,
        "vector check finished"
    );

    report
}
