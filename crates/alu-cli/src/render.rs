#![allow(clippy::module_name_repetitions)]

use alu_core::{AluInput, AluOutput, Opcode};
use serde::Serialize;

/// One evaluation in the shape emitted by `--json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvalRecord {
    /// Inputs that were evaluated.
    pub input: AluInput,
    /// Canonical mnemonic of the opcode.
    pub mnemonic: &'static str,
    /// Evaluator output.
    pub output: AluOutput,
}

impl EvalRecord {
    /// Evaluates `input` and captures the result.
    #[must_use]
    pub const fn evaluate(input: AluInput) -> Self {
        Self {
            input,
            mnemonic: input.opcode.mnemonic(),
            output: input.evaluate(),
        }
    }

    /// Renders `ADD 0x00000005 0x00000003 -> 0x00000008 Z=0 C=0 V=0`.
    #[must_use]
    pub fn to_line(&self) -> String {
        format!(
            "{:<4} 0x{:08X} 0x{:08X} -> {}",
            self.mnemonic, self.input.a, self.input.b, self.output
        )
    }
}

/// Evaluates all eight opcodes for one operand pair, in encoding order.
#[must_use]
pub fn table_records(a: u32, b: u32) -> Vec<EvalRecord> {
    Opcode::ALL
        .into_iter()
        .map(|opcode| EvalRecord::evaluate(AluInput::new(a, b, opcode)))
        .collect()
}

/// Renders records one per line.
#[must_use]
pub fn render_text(records: &[EvalRecord]) -> String {
    records
        .iter()
        .map(EvalRecord::to_line)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders records as a pretty-printed JSON array.
///
/// # Errors
///
/// Propagates serializer failures.
pub fn render_json(records: &[EvalRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Single evaluation helper used by `eval`.
#[must_use]
pub const fn eval_record(a: u32, b: u32, opcode: Opcode) -> EvalRecord {
    EvalRecord::evaluate(AluInput::new(a, b, opcode))
}
