//! End-to-end coverage for the vector file format and check loop.

#![allow(clippy::pedantic, clippy::nursery)]

use alu_core::{
    check_vectors, format_vectors, parse_vectors, reference_vectors, AluError, CheckConfig,
    OpcodePolicy, VectorOutcome, VectorParseErrorKind,
};
use proptest as _;
use rstest::rstest;
#[cfg(feature = "serde")]
use serde as _;
use thiserror as _;
use tracing as _;

const NETLIST_DUMP: &str = "\
# gate-level simulation dump
# a        b          op   result     z c v
0x00000005 0x00000003 ADD  0x00000008 0 0 0
0x00000005 0x00000007 SUB  0xFFFFFFFE 0 1 0
0xF0F0F0F0 0x0FF00FF0 AND  0x00F000F0 0 0 0
0xF0F0F0F0 0x0FF00FF0 OR   0xFFF0FFF0 0 0 0
0xF0F0F0F0 0x0FF00FF0 XOR  0xFF00FF00 0 0 0
0xF0F0F0F0 0x0FF00FF0 NAND 0xFF0FFF0F 0 0 0
0x0000F0F0 0x00000000 NOT  0xFFFF0F0F 0 0 0
0x12345678 0x00000000 PASS 0x12345678 0 0 0
";

#[test]
fn clean_netlist_dump_passes() {
    let vectors = parse_vectors(NETLIST_DUMP).expect("dump parses");
    assert_eq!(vectors.len(), 8);

    let report = check_vectors(&vectors, &CheckConfig::default());
    assert!(report.all_passed());
    assert_eq!(report.summary().total, 8);
}

#[test]
fn stuck_carry_in_dump_is_flagged_at_its_line() {
    let dump = NETLIST_DUMP.replace(
        "0x00000005 0x00000007 SUB  0xFFFFFFFE 0 1 0",
        "0x00000005 0x00000007 SUB  0xFFFFFFFE 0 0 0",
    );
    let vectors = parse_vectors(&dump).expect("dump parses");
    let report = check_vectors(&vectors, &CheckConfig::default());

    let failures: Vec<_> = report.failures().collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].vector.line, 4);
    match failures[0].outcome {
        VectorOutcome::Mismatch { actual } => assert!(actual.carry_out()),
        other => panic!("expected mismatch, got {other:?}"),
    }
}

#[test]
fn reference_vectors_survive_export_and_reimport() {
    let exported = format_vectors(&reference_vectors());
    let reimported = parse_vectors(&exported).expect("exported vectors parse");
    assert_eq!(reimported.len(), reference_vectors().len());

    let report = check_vectors(&reimported, &CheckConfig::default());
    assert!(report.all_passed());
}

#[rstest]
#[case(OpcodePolicy::Reject, false)]
#[case(OpcodePolicy::Mask, true)]
fn wide_opcode_bus_values_follow_policy(#[case] policy: OpcodePolicy, #[case] passes: bool) {
    // 0b1110 truncates to NOT.
    let vectors = parse_vectors("0x0000F0F0 0 14 0xFFFF0F0F 0 0 0").expect("parses");
    let report = check_vectors(&vectors, &CheckConfig::default().with_opcode_policy(policy));

    assert_eq!(report.all_passed(), passes);
    if !passes {
        assert_eq!(
            report.results[0].outcome,
            VectorOutcome::Rejected(AluError::OpcodeOutOfRange(14))
        );
    }
}

#[rstest]
#[case("1 2 ADD 3 0 0", VectorParseErrorKind::FieldCount { found: 6 })]
#[case("1 2 ADD 3 0 0 0 0", VectorParseErrorKind::FieldCount { found: 8 })]
#[case("1 2 MUL 3 0 0 0", VectorParseErrorKind::InvalidOpcode("MUL".to_string()))]
#[case("1 2 ADD 3 0 0 x", VectorParseErrorKind::InvalidFlag("x".to_string()))]
fn malformed_lines_report_their_kind(#[case] line: &str, #[case] kind: VectorParseErrorKind) {
    let error = parse_vectors(&format!("# header\n{line}\n")).expect_err("malformed line");
    assert_eq!(error.line, 2);
    assert_eq!(error.kind, kind);
}
