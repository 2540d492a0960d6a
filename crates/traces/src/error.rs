//! Error types for trace ingestion.
//!
//! The analysis pass itself never fails; only reading a trace in can.

#[derive(Debug, thiserror::Error)]
pub enum TraceError {
    #[error("I/O error reading trace: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed step record on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}
