//! Call-context reconstruction.
//!
//! A raw trace records call depth per step but not which account's context
//! the code runs in. This module walks a trace once and annotates every
//! step with its context address, resolving new addresses from the opcode
//! that opened each frame.

use ethereum_types::{Address, U256};
use tracing::trace;

use crate::opcodes::{CallFamily, Opcode};
use crate::types::Trace;

/// LIFO of caller contexts, one entry per open call frame.
///
/// Entries may be `None`: an unknown caller context is remembered and
/// restored just like a resolved one. Popping an empty stack yields
/// `None` rather than failing, so a trace whose depth drops below its
/// starting frame cannot break the pass.
#[derive(Debug, Default)]
pub struct AddressStack {
    data: Vec<Option<Address>>,
}

impl AddressStack {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(5),
        }
    }

    pub fn push(&mut self, addr: Option<Address>) {
        self.data.push(addr);
    }

    pub fn pop(&mut self) -> Option<Address> {
        match self.data.pop() {
            Some(addr) => addr,
            None => {
                trace!("address stack underflow, context becomes unknown");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Scan through the steps and assign a context address to every line
/// after the first.
///
/// The outermost context is treated as unknown; use
/// [`analyze_calls_from`] when the producer knows the transaction's
/// initial recipient.
pub fn analyze_calls(trace: &mut Trace) {
    analyze_calls_from(trace, None);
}

/// Like [`analyze_calls`], seeding the outermost frame with `initial`.
///
/// Single forward pass, O(n) in trace length. Depth transitions drive the
/// bookkeeping: an increase means the *previous* step's opcode opened a
/// frame, so the caller's context is pushed and the destination resolved
/// from that step's operands; a decrease restores the caller's context,
/// popping once per frame unwound (a revert deep in a call tree may
/// return through several frames in one step). Unknown contexts propagate
/// like resolved ones and never abort the pass.
pub fn analyze_calls_from(trace: &mut Trace, initial: Option<Address>) {
    let mut call_stack = AddressStack::new();
    let mut current = initial;

    let lines = trace.lines_mut();
    for i in 1..lines.len() {
        let (before, rest) = lines.split_at_mut(i);
        let (Some(prev), Some(line)) = (before.last(), rest.first_mut()) else {
            continue;
        };

        if line.depth > prev.depth {
            // A call or create was made at the previous step
            let destination = determine_destination(prev.op(), &prev.stack, current);
            call_stack.push(current);
            current = destination;
        } else if line.depth < prev.depth {
            for _ in 0..prev.depth.saturating_sub(line.depth) {
                current = call_stack.pop();
            }
        }
        line.context_address = current;
    }
}

/// Resolve the context address of a frame opened by `opcode`, given the
/// pre-execution operand `stack` (index 0 = top) and the caller's
/// `current` context.
///
/// Returns `None` whenever the destination cannot be determined: missing
/// operands in a malformed trace, any `CREATE`/`CREATE2` (the deployment
/// address additionally depends on the deployer's nonce or on salt and
/// init-code hash, neither of which a trace carries), or an opcode that
/// opens no frame at all.
pub fn determine_destination(
    opcode: Opcode,
    stack: &[U256],
    current: Option<Address>,
) -> Option<Address> {
    match opcode.call_family()? {
        // Stack layout: [gas, address, ...]
        CallFamily::Call => stack.get(1).map(word_to_address),
        // Borrowed code runs in the caller's own account context
        CallFamily::Delegate => current,
        CallFamily::Create => None,
    }
}

/// Truncate a 256-bit stack word to its low-order 20 bytes.
fn word_to_address(word: &U256) -> Address {
    let bytes = word.to_big_endian();
    Address::from_slice(&bytes[12..])
}
