//! Error types for the maze library.

use thiserror::Error;

/// All errors that can occur while building or solving a maze.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// A node or edge referenced by an operation is not in the graph.
    #[error("Not found in graph: {0}")]
    NotFound(String),

    /// A search mode other than BFS or DFS was requested.
    #[error("Invalid search mode {0:?}, expected \"BFS\" or \"DFS\"")]
    InvalidMode(String),

    /// The frontier emptied before the goal was dequeued.
    #[error("Search exhausted the frontier without reaching the goal")]
    Exhausted,

    /// The solver was driven before a search was configured.
    #[error("Solver has no search configured, call `set` first")]
    NotInitialized,

    /// A grid needs at least one row and one column.
    #[error("Invalid grid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// The input to the spanning tree builder is not connected.
    #[error("Graph is disconnected: spanning tree reached {reached} of {total} nodes")]
    Disconnected { reached: usize, total: usize },
}

impl MazeError {
    /// Builds a [`MazeError::NotFound`] from anything debug-printable.
    pub(crate) fn not_found(what: &str, item: &impl std::fmt::Debug) -> Self {
        MazeError::NotFound(format!("{} {:?}", what, item))
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, MazeError>;
