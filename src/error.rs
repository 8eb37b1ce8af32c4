//! Error types for the tracing engine
//!
//! Structural edge cases (empty input, duplicate keys, underflow, a missing
//! search target, an unreachable vertex) are not errors: they are recorded as
//! ordinary trace events.  [`TraceError`] only covers contract violations,
//! i.e. input a tracer refuses to run on because the resulting trace would be
//! meaningless.

use thiserror::Error;

/// Contract violations detected before or during tracing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TraceError {
    /// Binary search requires ascending input
    #[error("input is not sorted: element at index {index} is smaller than its predecessor")]
    UnsortedInput { index: usize },

    /// Vertex id outside `0..vertex_count`
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// Node label not present in a weighted graph
    #[error("unknown node '{label}'")]
    UnknownNode { label: String },

    /// Radix sort only handles non-negative integers
    #[error("radix sort requires non-negative values, got {value}")]
    NegativeRadixValue { value: i64 },

    /// A computed value does not fit the value type
    #[error("arithmetic overflow while computing {operation}")]
    ArithmeticOverflow { operation: String },

    /// An operation string could not be parsed
    #[error("invalid operation '{input}': {reason}")]
    InvalidOperation { input: String, reason: String },

    /// A snapshot could not be converted to its JSON form
    #[error("failed to serialize snapshot: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for TraceError {
    fn from(err: serde_json::Error) -> Self {
        TraceError::Serialization {
            message: err.to_string(),
        }
    }
}
