// =====================================================================
// File: error.rs
//
// Description:
//   Error kinds surfaced by the B+ tree index. The library never
//   recovers from one of these internally — every variant is handed
//   back to the caller (see spec section on error propagation).
// =====================================================================

use thiserror::Error;

/// Error conditions surfaced by [`crate::Tree`] and [`crate::Node`].
///
/// Structural mutations (`insert`, `delete`) never fail with one of
/// these on well-formed input; they only arise from lookups and from
/// the index-based accessors on [`crate::Node`].
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum BPTreeError {
    /// Lookup or delete for a hash that is absent at the target leaf.
    #[error("hash {0} not found in tree")]
    NotFound(u64),

    /// Programmer error: an index-based accessor was called with
    /// `index >= length`.
    #[error("index {index} out of range (length {length})")]
    IndexOutOfRange { index: usize, length: usize },

    /// A leaf-only operation was called on an internal node, or vice
    /// versa.
    #[error("operation requires a {expected} node")]
    WrongNodeKind { expected: &'static str },

    /// Searching a tree with no root. Unreachable with this crate's
    /// representation (the root always exists, even when empty); kept
    /// for parity with implementations that model the root as
    /// nullable.
    #[error("operation attempted on an empty tree")]
    EmptyTree,
}

/// Result type alias used throughout the index.
pub type Result<T> = std::result::Result<T, BPTreeError>;
