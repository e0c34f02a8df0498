//! Error types for MST computation.

use std::fmt;

/// Errors that can occur during MST computation, graph IO or configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum MstError {
    /// The vertex count must be at least 1.
    InvalidVertexCount(usize),

    /// An edge references a vertex outside `0..n`.
    VertexOutOfRange { edge: usize, vertex: u32, n: usize },

    /// An edge weight is NaN and cannot be ordered.
    NanWeight { edge: usize },

    /// The graph has more than one connected component.
    ///
    /// Solvers never return this on their own (they build a spanning forest);
    /// it is produced by [`crate::MstOutput::require_spanning`].
    Disconnected { components: usize },

    /// A configuration or generator name was not recognized.
    UnknownName { kind: &'static str, name: String },

    /// A malformed line in an edge-list file.
    Parse { line: usize, message: String },

    /// Underlying IO failure (message of the `std::io::Error`).
    Io(String),
}

impl fmt::Display for MstError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MstError::InvalidVertexCount(n) => {
                write!(f, "invalid vertex count: need at least 1, got {}", n)
            }
            MstError::VertexOutOfRange { edge, vertex, n } => {
                write!(
                    f,
                    "edge {} references vertex {} outside 0..{}",
                    edge, vertex, n
                )
            }
            MstError::NanWeight { edge } => write!(f, "edge {} has a NaN weight", edge),
            MstError::Disconnected { components } => {
                write!(f, "graph is disconnected: {} components", components)
            }
            MstError::UnknownName { kind, name } => write!(f, "unknown {} '{}'", kind, name),
            MstError::Parse { line, message } => {
                write!(f, "parse error on line {}: {}", line, message)
            }
            MstError::Io(msg) => write!(f, "io error: {}", msg),
        }
    }
}

impl std::error::Error for MstError {}

impl From<std::io::Error> for MstError {
    fn from(e: std::io::Error) -> Self {
        MstError::Io(e.to_string())
    }
}
