//! Helper functions for turning a rectangular grid into a graph.

use rand::Rng;

use crate::edge::Edge;
use crate::error::{MazeError, Result};
use crate::graph::Graph;
use crate::node::{Cell, Node};

/// Build the 4-connected graph of a `width` x `height` grid.
///
/// Every cell `(x, y)` becomes a node. Each cell gets an edge to its
/// east neighbor `(x + 1, y)` and its south neighbor `(x, y + 1)` when
/// they exist, so edges always point east or south. Every edge cost is
/// drawn independently from `[0, 1)`.
///
/// # Returns
/// A graph with `width * height` nodes and
/// `width * (height - 1) + height * (width - 1)` edges.
///
/// # Errors
/// [`MazeError::InvalidDimensions`] if either dimension is zero.
pub fn grid_to_graph(width: usize, height: usize) -> Result<Graph<Cell>> {
    grid_to_graph_with_rng(width, height, &mut rand::thread_rng())
}

/// See [`grid_to_graph`]. Edge costs are drawn from `rng`.
pub fn grid_to_graph_with_rng<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<Graph<Cell>> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }

    let mut graph = Graph::new();
    for x in 0..width {
        for y in 0..height {
            graph.add_node(Node::new((x, y)));
        }
    }

    for x in 0..width {
        for y in 0..height {
            if x + 1 < width {
                graph.add_edge(Edge::new((x, y), (x + 1, y), rng.gen::<f64>()))?;
            }
            if y + 1 < height {
                graph.add_edge(Edge::new((x, y), (x, y + 1), rng.gen::<f64>()))?;
            }
        }
    }

    debug!(
        "Grid {}x{}: {} nodes, {} edges",
        width,
        height,
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

#[cfg(test)]
mod grid_tests {
    use super::*;
    use crate::direction::Direction;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_node_and_edge_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        for width in 1..6 {
            for height in 1..6 {
                let graph = grid_to_graph_with_rng(width, height, &mut rng).unwrap();
                assert_eq!(graph.node_count(), width * height);
                assert_eq!(
                    graph.edge_count(),
                    width * (height - 1) + height * (width - 1)
                );
            }
        }
    }

    #[test]
    fn test_edges_are_unit_steps_east_or_south() {
        let graph = grid_to_graph(6, 4).unwrap();
        for edge in graph.edges() {
            let cost = edge.cost.into_inner();
            assert!((0.0..1.0).contains(&cost));
            assert_ne!(edge.from, edge.to);
            assert!(matches!(
                edge.direction(),
                Some(Direction::East) | Some(Direction::South)
            ));
        }
    }

    #[test]
    fn test_corner_and_interior_degrees() {
        let graph = grid_to_graph(3, 3).unwrap();
        assert_eq!(graph.edges_touching(&Node::new((0, 0))).unwrap().len(), 2);
        assert_eq!(graph.edges_touching(&Node::new((1, 0))).unwrap().len(), 3);
        assert_eq!(graph.edges_touching(&Node::new((1, 1))).unwrap().len(), 4);
        assert!(graph.edges_touching(&Node::new((3, 0))).is_err());
    }

    #[test]
    fn test_zero_dimension() {
        assert_eq!(
            grid_to_graph(0, 4).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 4
            }
        );
    }

    #[test]
    fn test_seeded_costs_repeat() {
        let a = grid_to_graph_with_rng(4, 4, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = grid_to_graph_with_rng(4, 4, &mut StdRng::seed_from_u64(9)).unwrap();
        for edge in a.edges() {
            let twin = b.edge_between(&edge.from, &edge.to).unwrap();
            assert_eq!(twin.cost, edge.cost);
        }
    }
}
