//! Definition of the [`SearchMode`] type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;

/// Search strategies.
///
/// Both strategies push new entries onto the back of the frontier. They
/// differ only in which end an entry is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SearchMode {
    /// Breadth-first: take from the front (FIFO).
    #[serde(rename = "BFS")]
    Bfs,
    /// Depth-first: take from the back (LIFO).
    #[default]
    #[serde(rename = "DFS")]
    Dfs,
}

impl FromStr for SearchMode {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BFS" => Ok(SearchMode::Bfs),
            "DFS" => Ok(SearchMode::Dfs),
            _ => Err(MazeError::InvalidMode(s.to_string())),
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchMode::Bfs => write!(f, "BFS"),
            SearchMode::Dfs => write!(f, "DFS"),
        }
    }
}
