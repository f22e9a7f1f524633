//! Error types shared by the red-black tree engine and its collections.

use std::collections::TryReserveError;
use std::error;
use std::fmt;
use std::result;

/// Convenience `Error` enum for the red-black tree collections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No element matched the requested key.
    KeyNotFound,
    /// The arena could not reserve memory for a new node.
    AllocError(TryReserveError),
    /// The tree already holds `max_size()` nodes.
    CapacityExceeded,
}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Error {
        Error::AllocError(err)
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::AllocError(ref error) => Some(error),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found"),
            Error::AllocError(ref error) => write!(f, "failed to allocate node: {}", error),
            Error::CapacityExceeded => write!(f, "tree is at maximum capacity"),
        }
    }
}

/// Convenience `Result` type for the red-black tree collections.
pub type Result<T> = result::Result<T, Error>;

/// A broken red-black tree invariant reported by `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    /// The root node is colored red.
    RedRoot,
    /// A red node has a red child.
    RedChildOfRed,
    /// Two paths from the same node contain a different number of black nodes.
    BlackHeightMismatch,
    /// A child's parent link does not point back at its parent.
    BrokenParentLink,
    /// An in-order neighbour compares less than its predecessor.
    OutOfOrder,
    /// Two equal keys were found in a tree that requires unique keys.
    DuplicateKey,
    /// The cached length differs from the number of reachable nodes.
    LenMismatch { expected: usize, actual: usize },
    /// The cached minimum or maximum is not the leftmost or rightmost node.
    StaleBounds,
}

impl error::Error for Violation {}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::RedRoot => write!(f, "root is red"),
            Violation::RedChildOfRed => write!(f, "red node has a red child"),
            Violation::BlackHeightMismatch => write!(f, "black heights differ"),
            Violation::BrokenParentLink => write!(f, "parent link is inconsistent"),
            Violation::OutOfOrder => write!(f, "keys are out of order"),
            Violation::DuplicateKey => write!(f, "duplicate key in unique tree"),
            Violation::LenMismatch { expected, actual } => {
                write!(f, "expected {} nodes, found {}", expected, actual)
            },
            Violation::StaleBounds => write!(f, "cached minimum or maximum is stale"),
        }
    }
}
