//! Opcode decoding and classification.

use std::str::FromStr;

use crate::opcodes::{CallFamily, Opcode};

#[test]
fn known_bytes_round_trip() {
    for byte in [0x00u8, 0x01, 0x33, 0x54, 0x60, 0x7F, 0x80, 0x9F, 0xA4, 0xF1, 0xFF] {
        let op = Opcode::from_u8(byte);
        assert_ne!(op, Opcode::INVALID, "0x{byte:02X} is assigned");
        assert_eq!(u8::from(op), byte);
    }
}

#[test]
fn unassigned_bytes_decode_to_invalid() {
    for byte in [0x0Cu8, 0x21, 0x4B, 0xA5, 0xEF, 0xFE] {
        assert_eq!(Opcode::from_u8(byte), Opcode::INVALID);
    }
}

#[test]
fn call_family_classification() {
    assert_eq!(Opcode::CALL.call_family(), Some(CallFamily::Call));
    assert_eq!(Opcode::STATICCALL.call_family(), Some(CallFamily::Call));
    assert_eq!(Opcode::DELEGATECALL.call_family(), Some(CallFamily::Delegate));
    assert_eq!(Opcode::CALLCODE.call_family(), Some(CallFamily::Delegate));
    assert_eq!(Opcode::CREATE.call_family(), Some(CallFamily::Create));
    assert_eq!(Opcode::CREATE2.call_family(), Some(CallFamily::Create));
    assert_eq!(Opcode::RETURN.call_family(), None);
    assert_eq!(Opcode::JUMP.call_family(), None);
}

#[test]
fn push_sizes() {
    assert_eq!(Opcode::PUSH0.push_size(), None);
    assert_eq!(Opcode::PUSH1.push_size(), Some(1));
    assert_eq!(Opcode::PUSH32.push_size(), Some(32));
    assert_eq!(Opcode::ADD.push_size(), None);
}

#[test]
fn names_parse_and_display() {
    assert_eq!(Opcode::from_str("CALL").expect("known mnemonic"), Opcode::CALL);
    assert_eq!(
        Opcode::from_str("DELEGATECALL").expect("known mnemonic"),
        Opcode::DELEGATECALL
    );
    assert!(Opcode::from_str("NOTANOP").is_err());
    assert_eq!(Opcode::PUSH1.to_string(), "PUSH1");
    assert_eq!(Opcode::KECCAK256.to_string(), "KECCAK256");
}
