//! Settings a front end hands to the maze engine.
//!
//! Every field has a default, so a partial document deserializes into a
//! complete config.

use serde::{Deserialize, Serialize};

use crate::error::{MazeError, Result};
use crate::graph::Graph;
use crate::maze::get_maze;
use crate::mode::SearchMode;
use crate::node::{Cell, Node};

/// Default maze width in cells.
pub const DEFAULT_WIDTH: usize = 30;
/// Default maze height in cells.
pub const DEFAULT_HEIGHT: usize = 30;

/// Maze size, search mode, and the cells to solve between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Strategy used by the solver.
    pub mode: SearchMode,
    /// Where the search starts. Defaults to the top left cell.
    pub start: Option<Cell>,
    /// Where the search ends. Defaults to the bottom right cell.
    pub goal: Option<Cell>,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            mode: SearchMode::default(),
            start: None,
            goal: None,
        }
    }
}

impl MazeConfig {
    /// Checks the dimensions and that start and goal lie on the grid.
    ///
    /// # Errors
    /// * [`MazeError::InvalidDimensions`] if a dimension is zero.
    /// * [`MazeError::NotFound`] if start or goal is off the grid.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        for cell in [self.start_cell(), self.goal_cell()] {
            if !self.contains(cell) {
                return Err(MazeError::not_found("cell", &cell));
            }
        }
        Ok(())
    }

    /// Whether `cell` lies within `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }

    /// The configured start, or `(0, 0)`.
    pub fn start_cell(&self) -> Cell {
        self.start.unwrap_or((0, 0))
    }

    /// The configured goal, or the opposite corner from `(0, 0)`.
    pub fn goal_cell(&self) -> Cell {
        self.goal.unwrap_or((
            self.width.saturating_sub(1),
            self.height.saturating_sub(1),
        ))
    }

    /// Start and goal as graph nodes.
    pub fn endpoints(&self) -> (Node<Cell>, Node<Cell>) {
        (Node::new(self.start_cell()), Node::new(self.goal_cell()))
    }

    /// Validates the config, then builds a fresh random maze.
    pub fn build_maze(&self) -> Result<Graph<Cell>> {
        self.validate()?;
        get_maze(self.width, self.height)
    }
}
