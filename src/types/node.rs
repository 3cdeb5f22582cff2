//! Struct definitions and implementations for objects that represent
//! vertices in a graph.
//!
//! A [`Node`] is a thin wrapper around an opaque value. In a maze the
//! value is a grid [`Cell`], but the graph and the search algorithms
//! only rely on the value being hashable and comparable.
//!
//! Identity is structural: two nodes wrapping equal values are the same
//! node. Nothing about a node depends on where or when it was created,
//! which is what lets the grid builder refer to a neighbor simply by
//! constructing its coordinate again.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A grid coordinate, `(x, y)`, with `x` growing to the east and `y`
/// growing to the south.
pub type Cell = (usize, usize);

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// Represent a vertex in a graph.
///
/// Equality, hashing and ordering are all derived from `value`. The
/// ordering carries no meaning for coordinates and only exists so that
/// nodes can sit in ordered containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Node<T> {
    /// The wrapped value that identifies the node.
    pub value: T,
}

impl<T> Node<T> {
    /// Wraps a value into a node.
    pub fn new(value: T) -> Self {
        Node { value }
    }

    /// Unwraps the node, returning its value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> From<T> for Node<T> {
    fn from(value: T) -> Self {
        Node::new(value)
    }
}

impl<T: fmt::Debug> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
