//! evmlab-traces
//!
//! Post-processing analysis of EVM execution traces. Given the ordered
//! step log recorded while running one transaction, reconstructs which
//! account's context each step executed in — information the raw trace
//! does not carry, since call-depth changes are the only structural
//! signal per step.

pub mod calls;
pub mod error;
pub mod opcodes;
pub mod reader;
pub mod types;

pub use calls::{AddressStack, analyze_calls, analyze_calls_from, determine_destination};
pub use error::TraceError;
pub use opcodes::{CallFamily, Opcode};
pub use types::{Trace, TraceLine};

#[cfg(test)]
mod tests;
