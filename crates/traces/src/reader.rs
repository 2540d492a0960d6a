//! Ingestion of JSON-lines step logs.
//!
//! Execution clients emit one JSON object per opcode step (the geth
//! structlog convention). Only the fields the analyzer reads are decoded;
//! everything else in a step object is ignored. Interleaved non-step
//! lines, such as the trailing output/gas summary, are skipped.

use std::io::BufRead;
use std::str::FromStr;

use ethereum_types::U256;
use serde::Deserialize;
use tracing::debug;

use crate::error::TraceError;
use crate::opcodes::Opcode;
use crate::types::{Trace, TraceLine};

/// One step object as emitted by the tracer, before normalization.
#[derive(Debug, Deserialize)]
struct RawStepLog {
    pc: usize,
    depth: usize,
    #[serde(default)]
    op: Option<u8>,
    #[serde(default, rename = "opName")]
    op_name: Option<String>,
    #[serde(default)]
    gas: Option<RawGas>,
    #[serde(default)]
    stack: Vec<U256>,
}

/// Gas is emitted as a JSON number by some tracers and a hex string by
/// others.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGas {
    Number(i64),
    Hex(String),
}

impl RawGas {
    fn value(&self) -> i64 {
        match self {
            RawGas::Number(n) => *n,
            RawGas::Hex(s) => {
                i64::from_str_radix(s.trim_start_matches("0x"), 16).unwrap_or_default()
            }
        }
    }
}

impl RawStepLog {
    fn into_line(self, step: usize) -> TraceLine {
        let opcode = match (self.op, self.op_name.as_deref()) {
            (Some(byte), _) => byte,
            (None, Some(name)) => Opcode::from_str(name).unwrap_or(Opcode::INVALID).into(),
            (None, None) => Opcode::INVALID.into(),
        };
        // Tracers emit the stack bottom-first; the analyzer wants the top
        // at index 0
        let mut stack = self.stack;
        stack.reverse();
        TraceLine {
            step,
            pc: self.pc,
            opcode,
            depth: self.depth,
            gas_remaining: self.gas.map(|g| g.value()).unwrap_or_default(),
            stack,
            context_address: None,
        }
    }
}

impl Trace {
    /// Read a trace from JSON-lines input.
    ///
    /// A line is a step if it is a JSON object carrying a `pc` field; any
    /// other valid JSON line is skipped. Invalid JSON and unreadable input
    /// are errors.
    pub fn from_json_lines<R: BufRead>(reader: R) -> Result<Trace, TraceError> {
        let mut trace = Trace::default();
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let value: serde_json::Value = serde_json::from_str(&line)
                .map_err(|source| TraceError::Json { line: lineno, source })?;
            if value.get("pc").is_none() {
                debug!(line = lineno, "skipping non-step line");
                continue;
            }
            let raw: RawStepLog = serde_json::from_value(value)
                .map_err(|source| TraceError::Json { line: lineno, source })?;
            let step = trace.len();
            trace.push(raw.into_line(step));
        }
        Ok(trace)
    }
}
