//! Shared test helpers: compact constructors for traces built by hand.

use ethereum_types::{Address, U256};

use crate::opcodes::Opcode;
use crate::types::{Trace, TraceLine};

/// Gas value used on every synthetic line; the analyzer never reads it.
pub const TEST_GAS: i64 = 1_000_000;

pub fn addr(n: u64) -> Address {
    Address::from_low_u64_be(n)
}

/// An address widened back to a 256-bit stack word.
pub fn addr_word(a: Address) -> U256 {
    U256::from_big_endian(a.as_bytes())
}

pub fn line(step: usize, depth: usize, opcode: Opcode, stack: Vec<U256>) -> TraceLine {
    TraceLine {
        step,
        pc: step,
        opcode: opcode.into(),
        depth,
        gas_remaining: TEST_GAS,
        stack,
        context_address: None,
    }
}

/// Pre-execution operand stack for a `CALL` targeting `to`
/// (index 0 = top: gas, address, value, argsOffset, argsSize,
/// retOffset, retSize).
pub fn call_operands(to: Address) -> Vec<U256> {
    vec![
        U256::from(0xFFFF),
        addr_word(to),
        U256::zero(),
        U256::zero(),
        U256::zero(),
        U256::zero(),
        U256::zero(),
    ]
}

/// Build a trace from (depth, opcode, stack) triples, assigning step
/// indices sequentially.
pub fn trace_of(steps: Vec<(usize, Opcode, Vec<U256>)>) -> Trace {
    Trace::new(
        steps
            .into_iter()
            .enumerate()
            .map(|(i, (depth, opcode, stack))| line(i, depth, opcode, stack))
            .collect(),
    )
}
