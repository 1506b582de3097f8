//! Built-in reference vectors.
//!
//! Expected values are written out literally rather than computed, so the
//! set can be exported to drive a gate-level simulation and checked against
//! its dump.

use crate::opcode::Opcode::{Add, And, Nand, Not, Or, PassA, Sub, Xor};
use crate::vector::TestVector;

const LOGIC_A: u32 = 0xF0F0_F0F0;
const LOGIC_B: u32 = 0x0FF0_0FF0;

/// Carry-chain and signed-overflow boundaries for ADD and SUB.
pub const CARRY_BOUNDARY_VECTORS: [TestVector; 8] = [
    TestVector::new(0xFFFF_FFFF, 1, Add, 0x0000_0000, true, true, false),
    TestVector::new(0x7FFF_FFFF, 1, Add, 0x8000_0000, false, false, true),
    TestVector::new(0x8000_0000, 0x8000_0000, Add, 0x0000_0000, true, true, true),
    TestVector::new(3, 5, Sub, 0xFFFF_FFFE, false, true, false),
    TestVector::new(0x8000_0000, 1, Sub, 0x7FFF_FFFF, false, false, true),
    TestVector::new(0, 0, Sub, 0x0000_0000, true, false, false),
    TestVector::new(0, 1, Sub, 0xFFFF_FFFF, false, true, false),
    TestVector::new(0x7FFF_FFFF, 0xFFFF_FFFF, Sub, 0x8000_0000, false, true, true),
];

/// Small-operand sanity checks and single-operand ops with a noisy B.
pub const SANITY_VECTORS: [TestVector; 6] = [
    TestVector::new(5, 3, Add, 8, false, false, false),
    TestVector::new(5, 7, Sub, 0xFFFF_FFFE, false, true, false),
    TestVector::new(0x0000_F0F0, 0, Not, 0xFFFF_0F0F, false, false, false),
    TestVector::new(0x0000_F0F0, 0xFFFF_FFFF, Not, 0xFFFF_0F0F, false, false, false),
    TestVector::new(0x1234_5678, 0, PassA, 0x1234_5678, false, false, false),
    TestVector::new(0x1234_5678, 0xDEAD_BEEF, PassA, 0x1234_5678, false, false, false),
];

/// Bitwise ops over one fixed operand pair.
pub const LOGIC_VECTORS: [TestVector; 4] = [
    TestVector::new(LOGIC_A, LOGIC_B, And, 0x00F0_00F0, false, false, false),
    TestVector::new(LOGIC_A, LOGIC_B, Or, 0xFFF0_FFF0, false, false, false),
    TestVector::new(LOGIC_A, LOGIC_B, Xor, 0xFF00_FF00, false, false, false),
    TestVector::new(LOGIC_A, LOGIC_B, Nand, 0xFF0F_FF0F, false, false, false),
];

/// All reference vectors in a stable order.
#[must_use]
pub fn reference_vectors() -> Vec<TestVector> {
    CARRY_BOUNDARY_VECTORS
        .iter()
        .chain(SANITY_VECTORS.iter())
        .chain(LOGIC_VECTORS.iter())
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::reference_vectors;
    use crate::config::CheckConfig;
    use crate::opcode::Opcode;
    use crate::vector::check_vectors;

    #[test]
    fn every_reference_vector_passes() {
        let report = check_vectors(&reference_vectors(), &CheckConfig::default());
        for failure in report.failures() {
            panic!("reference vector failed: {failure}");
        }
        assert!(report.all_passed());
    }

    #[test]
    fn reference_set_covers_every_opcode() {
        let covered: HashSet<_> = reference_vectors()
            .iter()
            .filter_map(|v| v.decoded_opcode())
            .collect();
        assert_eq!(covered, Opcode::ALL.into_iter().collect());
    }
}
