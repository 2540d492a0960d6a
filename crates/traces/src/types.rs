//! Core data types for recorded execution traces.

use ethereum_types::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::opcodes::Opcode;

/// A single opcode execution step captured from a running VM.
///
/// Fields describe the machine state *before* the opcode executed, so
/// `stack` holds the opcode's operands. `context_address` is not part of
/// the raw capture; it is filled in by [`crate::calls::analyze_calls`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceLine {
    /// Sequential step index (0-based, monotonically increasing).
    pub step: usize,
    /// Program counter before this opcode executed.
    pub pc: usize,
    /// The opcode byte.
    pub opcode: u8,
    /// Call depth (1 = top-level call frame).
    pub depth: usize,
    /// Gas remaining before this opcode.
    pub gas_remaining: i64,
    /// Operand stack, index 0 = top of stack.
    pub stack: Vec<U256>,
    /// Address whose storage/balance the code at this step operates on.
    ///
    /// `None` means the context could not be determined (or was never
    /// computed, for the first line of a trace).
    pub context_address: Option<Address>,
}

impl TraceLine {
    /// The decoded opcode for this step.
    pub fn op(&self) -> Opcode {
        Opcode::from_u8(self.opcode)
    }

    /// Human-readable opcode name (e.g. "ADD", "PUSH1").
    pub fn opcode_name(&self) -> String {
        format!("{}", self.op())
    }
}

/// An ordered, finite execution trace: every step recorded while running
/// one transaction or call, possibly spanning many nested frames.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trace {
    lines: Vec<TraceLine>,
}

impl Trace {
    pub fn new(lines: Vec<TraceLine>) -> Self {
        Self { lines }
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The step at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&TraceLine> {
        self.lines.get(index)
    }

    /// All steps, in execution order.
    pub fn lines(&self) -> &[TraceLine] {
        &self.lines
    }

    /// Mutable access to the steps, for annotation passes.
    pub fn lines_mut(&mut self) -> &mut [TraceLine] {
        &mut self.lines
    }

    /// Append a step to the end of the trace.
    pub fn push(&mut self, line: TraceLine) {
        self.lines.push(line);
    }

    /// Deepest call nesting observed anywhere in the trace.
    pub fn max_depth(&self) -> usize {
        self.lines.iter().map(|line| line.depth).max().unwrap_or(0)
    }
}
