//! Combinational evaluator for the 32-bit ALU.
//!
//! Evaluation is a single pure transformation:
//! 1. Dispatch on the opcode to compute the 32-bit result.
//! 2. ADD/SUB derive carry and overflow from a 33-bit intermediate.
//! 3. The zero flag is computed once from the result, for every opcode.
//!
//! There is no state between calls and no failure for in-domain inputs.

mod flags;
mod wide;

pub use flags::{AluFlags, AluOutput};
pub use wide::{add_overflow, add_wide, carry_bit, low_word, sub_overflow, sub_wide, SIGN_BIT};

use crate::config::OpcodePolicy;
use crate::error::AluError;
use crate::opcode::Opcode;

/// One set of evaluator inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct AluInput {
    /// Operand A.
    pub a: u32,
    /// Operand B.
    pub b: u32,
    /// Selected operation.
    pub opcode: Opcode,
}

impl AluInput {
    /// Creates an input triple.
    #[must_use]
    pub const fn new(a: u32, b: u32, opcode: Opcode) -> Self {
        Self { a, b, opcode }
    }

    /// Evaluates this input.
    #[must_use]
    pub const fn evaluate(self) -> AluOutput {
        evaluate(self.a, self.b, self.opcode)
    }
}

/// Evaluates one ALU operation.
///
/// Total over all operand pairs and opcodes; the same inputs always produce
/// the same output.
#[must_use]
pub const fn evaluate(a: u32, b: u32, opcode: Opcode) -> AluOutput {
    let (result, carry_out, overflow) = match opcode {
        Opcode::Add => {
            let sum = add_wide(a, b);
            let result = low_word(sum);
            (result, carry_bit(sum), add_overflow(a, b, result))
        }
        Opcode::Sub => {
            let diff = sub_wide(a, b);
            let result = low_word(diff);
            (result, carry_bit(diff), sub_overflow(a, b, result))
        }
        Opcode::And => (a & b, false, false),
        Opcode::Or => (a | b, false, false),
        Opcode::Xor => (a ^ b, false, false),
        Opcode::Nand => (!(a & b), false, false),
        Opcode::Not => (!a, false, false),
        Opcode::PassA => (a, false, false),
    };

    AluOutput {
        result,
        flags: AluFlags {
            zero: result == 0,
            carry_out,
            overflow,
        },
    }
}

/// Evaluates with a raw opcode value, rejecting anything outside `0..=7`.
///
/// # Errors
///
/// Returns [`AluError::OpcodeOutOfRange`] if `opcode >= 8`.
pub const fn evaluate_raw(a: u32, b: u32, opcode: u8) -> Result<AluOutput, AluError> {
    match Opcode::from_u3(opcode) {
        Some(opcode) => Ok(evaluate(a, b, opcode)),
        None => Err(AluError::OpcodeOutOfRange(opcode)),
    }
}

/// Evaluates with a raw opcode value truncated to its low three bits.
#[must_use]
pub const fn evaluate_masked(a: u32, b: u32, opcode: u8) -> AluOutput {
    evaluate(a, b, Opcode::from_masked(opcode))
}

/// Evaluates a raw opcode value under the given out-of-domain policy.
///
/// # Errors
///
/// Returns [`AluError::OpcodeOutOfRange`] if `opcode >= 8` and the policy
/// is [`OpcodePolicy::Reject`].
pub const fn evaluate_with_policy(
    a: u32,
    b: u32,
    opcode: u8,
    policy: OpcodePolicy,
) -> Result<AluOutput, AluError> {
    match policy {
        OpcodePolicy::Reject => evaluate_raw(a, b, opcode),
        OpcodePolicy::Mask => Ok(evaluate_masked(a, b, opcode)),
    }
}

#[cfg(test)]
mod tests {
    use super::{evaluate, evaluate_masked, evaluate_raw, evaluate_with_policy, AluInput};
    use crate::config::OpcodePolicy;
    use crate::error::AluError;
    use crate::opcode::Opcode;

    #[test]
    fn add_carry_wraps_to_zero() {
        let out = evaluate(0xFFFF_FFFF, 1, Opcode::Add);
        assert_eq!(out.into_tuple(), (0, true, true, false));
    }

    #[test]
    fn add_signed_overflow_without_carry() {
        let out = evaluate(0x7FFF_FFFF, 1, Opcode::Add);
        assert_eq!(out.into_tuple(), (0x8000_0000, false, false, true));
    }

    #[test]
    fn add_of_two_negatives_sets_both_flags() {
        let out = evaluate(0x8000_0000, 0x8000_0000, Opcode::Add);
        assert_eq!(out.into_tuple(), (0, true, true, true));
    }

    #[test]
    fn sub_borrow_sets_carry() {
        let out = evaluate(3, 5, Opcode::Sub);
        assert_eq!(out.into_tuple(), (0xFFFF_FFFE, false, true, false));
    }

    #[test]
    fn sub_signed_overflow() {
        let out = evaluate(0x8000_0000, 1, Opcode::Sub);
        assert_eq!(out.into_tuple(), (0x7FFF_FFFF, false, false, true));
    }

    #[test]
    fn sub_of_equal_values_is_zero_without_borrow() {
        let out = evaluate(0x1234_5678, 0x1234_5678, Opcode::Sub);
        assert_eq!(out.into_tuple(), (0, true, false, false));
    }

    #[test]
    fn single_operand_ops_ignore_b() {
        for b in [0, 1, 0xFFFF_FFFF, 0xDEAD_BEEF] {
            assert_eq!(evaluate(0x0000_F0F0, b, Opcode::Not).result, 0xFFFF_0F0F);
            assert_eq!(evaluate(0x1234_5678, b, Opcode::PassA).result, 0x1234_5678);
        }
    }

    #[test]
    fn zero_flag_applies_to_logic_ops() {
        assert!(evaluate(0xF0F0_F0F0, 0x0F0F_0F0F, Opcode::And).zero());
        assert!(evaluate(0xFFFF_FFFF, 0, Opcode::Not).zero());
        assert!(evaluate(0, 0xFFFF_FFFF, Opcode::PassA).zero());
        assert!(!evaluate(0, 0, Opcode::Nand).zero());
    }

    #[test]
    fn raw_evaluation_rejects_out_of_domain_opcodes() {
        assert_eq!(evaluate_raw(1, 2, 8), Err(AluError::OpcodeOutOfRange(8)));
        assert_eq!(evaluate_raw(1, 2, 0), Ok(evaluate(1, 2, Opcode::Add)));
    }

    #[test]
    fn masked_evaluation_truncates_opcode() {
        assert_eq!(evaluate_masked(5, 3, 0b1001), evaluate(5, 3, Opcode::Sub));
    }

    #[test]
    fn policy_selects_reject_or_mask() {
        assert_eq!(
            evaluate_with_policy(5, 3, 9, OpcodePolicy::Reject),
            Err(AluError::OpcodeOutOfRange(9))
        );
        assert_eq!(
            evaluate_with_policy(5, 3, 9, OpcodePolicy::Mask),
            Ok(evaluate(5, 3, Opcode::Sub))
        );
    }

    #[test]
    fn input_record_evaluates_like_free_function() {
        let input = AluInput::new(5, 3, Opcode::Add);
        assert_eq!(input.evaluate().result, 8);
    }
}
