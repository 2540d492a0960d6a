mod helpers;

mod opcode_tests;
mod serde_tests;
