//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::direction::Direction;
use crate::node::{Cell, Node};

/// An edge is an undirected connection between two nodes.
/// The cost represents the "weight" of the edge.
///
/// Two edges are equal when they join the same `(from, to)` pair in the
/// same orientation; the cost is not part of the identity. Edges are
/// *ordered* by cost alone, which is what the spanning tree builder's
/// priority queue relies on.
///
/// The orientation is kept even though the connection is undirected: a
/// grid edge always points east or south, and renderers use that to
/// decide which wall the edge opens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Edge<T> {
    /// One end of the edge.
    pub from: Node<T>,

    /// The other end of the edge.
    pub to: Node<T>,

    /// The weight of the edge.
    pub cost: OrderedFloat<f64>,
}

impl<T> Edge<T> {
    /// Creates a new edge.
    pub fn new(from: impl Into<Node<T>>, to: impl Into<Node<T>>, cost: f64) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            cost: OrderedFloat(cost),
        }
    }
}

impl<T: PartialEq> Edge<T> {
    /// Whether `node` is one of the endpoints.
    pub fn touches(&self, node: &Node<T>) -> bool {
        self.from == *node || self.to == *node
    }

    /// The endpoint opposite to `node`.
    ///
    /// Returns [`None`] if `node` is not an endpoint.
    pub fn other(&self, node: &Node<T>) -> Option<&Node<T>> {
        if self.from == *node {
            Some(&self.to)
        } else if self.to == *node {
            Some(&self.from)
        } else {
            None
        }
    }

    /// Whether the edge joins `a` and `b`, in either orientation.
    pub fn connects(&self, a: &Node<T>, b: &Node<T>) -> bool {
        (self.from == *a && self.to == *b) || (self.from == *b && self.to == *a)
    }
}

impl Edge<Cell> {
    /// The direction of travel from `from` to `to`, for edges between
    /// orthogonally adjacent cells.
    pub fn direction(&self) -> Option<Direction> {
        Direction::between(self.from.value, self.to.value)
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl<T: Eq> Eq for Edge<T> {}

impl<T: Hash> Hash for Edge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}

impl<T: Eq> PartialOrd for Edge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Eq> Ord for Edge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

#[cfg(test)]
mod edge_tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_ignores_cost() {
        let a = Edge::new((0, 0), (1, 0), 0.25);
        let b = Edge::new((0, 0), (1, 0), 0.75);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_orientation_is_part_of_identity() {
        let forward = Edge::new((0, 0), (1, 0), 0.5);
        let backward = Edge::new((1, 0), (0, 0), 0.5);
        assert_ne!(forward, backward);
        assert!(forward.connects(&backward.from, &backward.to));
    }

    #[test]
    fn test_ordering_by_cost_only() {
        let cheap = Edge::new((9, 9), (9, 8), 0.1);
        let pricey = Edge::new((0, 0), (0, 1), 0.9);
        assert!(cheap < pricey);
        assert_eq!(
            Edge::new((0, 0), (0, 1), 0.3).cmp(&Edge::new((5, 5), (5, 6), 0.3)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_other_endpoint() {
        let edge = Edge::new((2, 3), (2, 4), 0.0);
        assert_eq!(edge.other(&Node::new((2, 3))), Some(&Node::new((2, 4))));
        assert_eq!(edge.other(&Node::new((2, 4))), Some(&Node::new((2, 3))));
        assert_eq!(edge.other(&Node::new((0, 0))), None);
        assert!(edge.touches(&Node::new((2, 4))));
    }

    #[test]
    fn test_grid_direction() {
        let east: Edge<Cell> = Edge::new((0, 0), (1, 0), 0.0);
        let north: Edge<Cell> = Edge::new((0, 1), (0, 0), 0.0);
        let diagonal: Edge<Cell> = Edge::new((0, 0), (1, 1), 0.0);
        assert_eq!(east.direction(), Some(Direction::East));
        assert_eq!(north.direction(), Some(Direction::North));
        assert_eq!(diagonal.direction(), None);
    }
}
