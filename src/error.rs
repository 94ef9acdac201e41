//! Error types for path evaluation.

use thiserror::Error;

/// Errors produced by node lookups and curve evaluation.
///
/// Selection movement at the ends of the path is not an error; it
/// saturates silently.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SplineError {
    /// A node index fell outside the path.
    ///
    /// The index is signed so that a lookup driven by a negative curve
    /// parameter can report the virtual index it would have read.
    #[error("node index {index} is out of range for a path of {len} nodes")]
    OutOfRange {
        /// The offending index.
        index: isize,
        /// Number of nodes in the path.
        len: usize,
    },

    /// The path is too short to evaluate.
    ///
    /// A segment reads one node before and two nodes after its start,
    /// so evaluation needs at least four nodes.
    #[error("path has {len} nodes but evaluation needs at least 4")]
    InvalidPathLength {
        /// Number of nodes in the path.
        len: usize,
    },
}
