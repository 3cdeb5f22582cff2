//! Mazes: random spanning trees over grid graphs.
//!
//! A tree edge is an open passage between two cells. Two adjacent cells
//! without a tree edge between them are separated by a wall.

use rand::Rng;

use crate::direction::Direction;
use crate::error::{MazeError, Result};
use crate::graph::Graph;
use crate::mst::get_mst;
use crate::node::{Cell, Node};
use crate::utils::grid::grid_to_graph_with_rng;

/// Creates a random `width` x `height` maze.
///
/// # Errors
/// [`MazeError::InvalidDimensions`] if either dimension is zero.
pub fn get_maze(width: usize, height: usize) -> Result<Graph<Cell>> {
    get_maze_with_rng(width, height, &mut rand::thread_rng())
}

/// See [`get_maze`]. Edge costs are drawn from `rng`.
pub fn get_maze_with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Graph<Cell>> {
    info!("Building a {}x{} maze", width, height);
    let grid = grid_to_graph_with_rng(width, height, rng)?;
    let maze = get_mst(&grid)?;
    info!("Maze ready with {} passages", maze.edge_count());
    Ok(maze)
}

/// Sides of `cell` that open into a neighboring cell.
///
/// Returned in [`Direction::ALL`] order.
///
/// # Errors
/// [`MazeError::NotFound`] if `cell` is not in the maze.
pub fn open_directions(maze: &Graph<Cell>, cell: Cell) -> Result<Vec<Direction>> {
    let node = Node::new(cell);
    let edges = maze.edges_touching(&node)?;
    Ok(Direction::ALL
        .into_iter()
        .filter(|dir| {
            edges
                .iter()
                .filter_map(|e| e.other(&node))
                .any(|other| Direction::between(cell, other.value) == Some(*dir))
        })
        .collect())
}

/// Whether a wall separates two orthogonally adjacent cells.
///
/// # Errors
/// [`MazeError::NotFound`] if either cell is not in the maze, or if the
/// cells are not adjacent.
pub fn is_wall_between(maze: &Graph<Cell>, a: Cell, b: Cell) -> Result<bool> {
    let (na, nb) = (Node::new(a), Node::new(b));
    for node in [&na, &nb] {
        if !maze.contains_node(node) {
            return Err(MazeError::not_found("node", &node.value));
        }
    }
    if Direction::between(a, b).is_none() {
        return Err(MazeError::not_found("adjacent cell pair", &(a, b)));
    }
    Ok(maze.edge_between(&na, &nb).is_none())
}
