//! Minimum spanning trees with Prim's algorithm.
//!
//! The builder grows a tree from one start node. A min-heap holds every
//! edge seen at the border of the tree, keyed by cost only. Popping an
//! edge whose endpoints are both in the tree would close a cycle, so it
//! is dropped. Otherwise the edge and its new endpoint join the tree and
//! the new endpoint's edges go on the heap.
//!
//! Ties between equal costs are broken by the heap. Grid edge costs are
//! continuous random draws, so ties do not occur in practice.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;

use crate::edge::Edge;
use crate::error::{MazeError, Result};
use crate::graph::Graph;
use crate::node::Node;

/// Builds a spanning tree one edge at a time.
///
/// Each [`MstBuilder::step`] adds exactly one tree edge, which lets a
/// caller animate the construction. [`MstBuilder::finish`] runs the
/// remaining steps.
pub struct MstBuilder<'a, T> {
    graph: &'a Graph<T>,
    tree: Graph<T>,
    queue: BinaryHeap<Reverse<Edge<T>>>,
    target_edges: usize,
}

impl<'a, T: Clone + Eq + Hash + Debug> MstBuilder<'a, T> {
    /// Starts a tree at an arbitrary node of `graph`.
    ///
    /// An empty graph yields a builder that is already done.
    pub fn new(graph: &'a Graph<T>) -> Self {
        let mut builder = MstBuilder {
            graph,
            tree: Graph::new(),
            queue: BinaryHeap::new(),
            target_edges: graph.node_count().saturating_sub(1),
        };

        if let Some(start) = graph.nodes().next() {
            debug!("Spanning tree starts at {:?}", start.value);
            builder.tree.add_node(start.clone());
            builder.push_edges_of(start);
        }
        builder
    }

    /// Adds the next tree edge.
    ///
    /// # Returns
    /// The edge added, or [`None`] if the tree already spans the graph.
    ///
    /// # Errors
    /// [`MazeError::Disconnected`] if the border runs out of edges
    /// before every node is reached.
    pub fn step(&mut self) -> Result<Option<Edge<T>>> {
        if self.is_done() {
            return Ok(None);
        }

        while let Some(Reverse(edge)) = self.queue.pop() {
            let has_from = self.tree.contains_node(&edge.from);
            let has_to = self.tree.contains_node(&edge.to);
            if has_from && has_to {
                continue;
            }

            let new_node = if has_from {
                edge.to.clone()
            } else {
                edge.from.clone()
            };
            self.tree.add_node(new_node.clone());
            self.tree.add_edge(edge.clone())?;
            self.push_edges_of(&new_node);
            return Ok(Some(edge));
        }

        warn!(
            "Spanning tree stalled at {} of {} nodes",
            self.tree.node_count(),
            self.graph.node_count()
        );
        Err(MazeError::Disconnected {
            reached: self.tree.node_count(),
            total: self.graph.node_count(),
        })
    }

    /// Whether the tree spans every node of the input graph.
    pub fn is_done(&self) -> bool {
        self.tree.edge_count() >= self.target_edges
    }

    /// The tree built so far.
    pub fn tree(&self) -> &Graph<T> {
        &self.tree
    }

    /// Runs the builder to completion and returns the tree.
    pub fn finish(mut self) -> Result<Graph<T>> {
        while !self.is_done() {
            self.step()?;
        }
        debug!(
            "Spanning tree done: {} nodes, {} edges",
            self.tree.node_count(),
            self.tree.edge_count()
        );
        Ok(self.tree)
    }

    fn push_edges_of(&mut self, node: &Node<T>) {
        // Nodes handed to this function always come from `self.graph`.
        if let Ok(edges) = self.graph.edges_touching(node) {
            self.queue.extend(edges.iter().cloned().map(Reverse));
        }
    }
}

/// Uses Prim's algorithm to create a minimum spanning tree.
///
/// # Errors
/// [`MazeError::Disconnected`] if `graph` is not connected.
pub fn get_mst<T: Clone + Eq + Hash + Debug>(graph: &Graph<T>) -> Result<Graph<T>> {
    MstBuilder::new(graph).finish()
}

//---------------------------------------------------------------
// Unit Tests
//---------------------------------------------------------------
