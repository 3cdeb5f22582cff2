//! Maze Generation and Solving Library.
//! Builds random mazes as spanning trees of grid graphs and solves them
//! step by step with breadth-first or depth-first search.
//!
//! A maze is a [`Graph`] of grid [`Cell`]s whose edges are the open
//! passages. [`get_maze`] creates one; a [`Solver`] walks it.
//!
//! ```
//! use maze_graph::{get_maze, Node, SearchMode, Solver};
//!
//! let maze = get_maze(10, 10).unwrap();
//! let mut solver = Solver::new();
//! solver.set(&maze, Node::new((0, 0)), Node::new((9, 9)), SearchMode::Bfs);
//!
//! let path = solver.run_to_completion().unwrap();
//! assert_eq!(path.first(), Some(&Node::new((0, 0))));
//! assert_eq!(path.last(), Some(&Node::new((9, 9))));
//! ```

#[macro_use]
extern crate log;

pub mod types {
    pub mod direction;
    pub mod edge;
    pub mod error;
    pub mod mode;
    pub mod node;
    pub mod solver;
    pub mod status;
}

pub mod algorithms {
    pub mod graph;
    pub mod mst;
}

pub mod utils {
    pub mod grid;
    pub mod interop;
    pub mod maze;
}

pub mod config;

pub use algorithms::*;
pub use types::*;
pub use utils::*;

pub use algorithms::graph::Graph;
pub use algorithms::mst::{get_mst, MstBuilder};
pub use config::MazeConfig;
pub use types::direction::Direction;
pub use types::edge::Edge;
pub use types::error::{MazeError, Result};
pub use types::mode::SearchMode;
pub use types::node::{Cell, Node};
pub use types::solver::engine::Solver;
pub use types::status::Status;
pub use utils::grid::{grid_to_graph, grid_to_graph_with_rng};
pub use utils::interop::to_petgraph;
pub use utils::maze::{get_maze, get_maze_with_rng, is_wall_between, open_directions};
