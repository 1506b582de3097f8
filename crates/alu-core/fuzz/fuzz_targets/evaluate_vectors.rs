#![no_main]

use alu_core::{
    check_vectors, evaluate_masked, evaluate_raw, parse_vectors, CheckConfig, OpcodePolicy,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() >= 9 {
        let a = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        let b = u32::from_be_bytes([data[4], data[5], data[6], data[7]]);
        let opcode = data[8];

        let masked = evaluate_masked(a, b, opcode);
        assert_eq!(masked.zero(), masked.result == 0);
        if let Ok(raw) = evaluate_raw(a, b, opcode) {
            assert_eq!(raw, masked);
        }
    }

    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(vectors) = parse_vectors(text) {
            let config = CheckConfig::default().with_opcode_policy(OpcodePolicy::Mask);
            let report = check_vectors(&vectors, &config);
            assert_eq!(report.results.len(), vectors.len());
        }
    }
});
