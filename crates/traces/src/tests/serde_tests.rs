//! Serialization of annotated traces, as consumed by the visualizer and
//! differential-comparison tooling.

use ethereum_types::U256;

use super::helpers::{addr, line, trace_of};
use crate::opcodes::Opcode;
use crate::types::Trace;

#[test]
fn trace_line_serializes() {
    let mut step = line(3, 2, Opcode::CALL, vec![U256::from(100)]);
    step.context_address = Some(addr(0xBEEF));

    let json = serde_json::to_value(&step).expect("TraceLine should serialize");
    assert_eq!(json["step"], 3);
    assert_eq!(json["pc"], 3);
    assert_eq!(json["opcode"], 0xF1);
    assert_eq!(json["depth"], 2);
    assert_eq!(json["stack"][0], "0x64");
    assert_eq!(
        json["context_address"],
        "0x000000000000000000000000000000000000beef"
    );
}

#[test]
fn unknown_context_serializes_as_null() {
    let step = line(0, 1, Opcode::STOP, vec![]);
    let json = serde_json::to_value(&step).expect("TraceLine should serialize");
    assert!(json["context_address"].is_null());
}

#[test]
fn trace_round_trips() {
    let trace = trace_of(vec![
        (1, Opcode::PUSH1, vec![]),
        (1, Opcode::CALL, vec![U256::from(0xFFFF), U256::from(0xBEEF)]),
        (2, Opcode::STOP, vec![]),
    ]);
    let json = serde_json::to_string(&trace).expect("Trace should serialize");
    let back: Trace = serde_json::from_str(&json).expect("Trace should deserialize");

    assert_eq!(back.len(), trace.len());
    for (a, b) in trace.lines().iter().zip(back.lines()) {
        assert_eq!(a.step, b.step);
        assert_eq!(a.opcode, b.opcode);
        assert_eq!(a.depth, b.depth);
        assert_eq!(a.stack, b.stack);
    }
}
