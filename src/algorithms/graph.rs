//! Defines the graph and associated functions.
//!
//! Use a [`HashSet`] for nodes and edges, and a [`HashMap`] from every
//! node to the edges touching it. The map is an index over the edge
//! set: it owns copies of the edges purely for lookup and is updated by
//! every mutation so that it never disagrees with the edge set.
//!
//! Finding the edges at a node through the index is *O*(*degree*)
//! instead of *O*(*E*). Both the spanning tree builder and the solver
//! perform that lookup once per node they visit.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::edge::Edge;
use crate::error::{MazeError, Result};
use crate::node::Node;

/// Represents an undirected, weighted graph.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    nodes: HashSet<Node<T>>,
    edges: HashSet<Edge<T>>,
    /// Edges touching each node, keyed by either endpoint.
    adjacency: HashMap<Node<T>, Vec<Edge<T>>>,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Graph {
            nodes: HashSet::new(),
            edges: HashSet::new(),
            adjacency: HashMap::new(),
        }
    }
}

impl<T: Clone + Eq + Hash + std::fmt::Debug> Graph<T> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph from initial nodes and edges.
    ///
    /// Every edge endpoint must be among `nodes`.
    pub fn from_parts(
        nodes: impl IntoIterator<Item = Node<T>>,
        edges: impl IntoIterator<Item = Edge<T>>,
    ) -> Result<Self> {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        for edge in edges {
            graph.add_edge(edge)?;
        }
        Ok(graph)
    }

    /// Adds a node if it is not already present.
    ///
    /// # Returns
    /// `true` if the node was newly inserted.
    pub fn add_node(&mut self, node: Node<T>) -> bool {
        self.adjacency.entry(node.clone()).or_default();
        self.nodes.insert(node)
    }

    /// Removes a node together with every edge touching it.
    ///
    /// # Errors
    /// [`MazeError::NotFound`] if the node is absent.
    pub fn remove_node(&mut self, node: &Node<T>) -> Result<()> {
        if !self.nodes.contains(node) {
            return Err(MazeError::not_found("node", &node.value));
        }

        let touching = self.adjacency.remove(node).unwrap_or_default();
        for edge in &touching {
            self.edges.remove(edge);
            if let Some(other) = edge.other(node) {
                if other != node {
                    self.unindex(other, edge);
                }
            }
        }
        self.nodes.remove(node);
        Ok(())
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Adding an edge equal to one already present leaves the graph
    /// untouched, including the cost of the existing edge.
    ///
    /// # Returns
    /// `true` if the edge was newly inserted.
    ///
    /// # Errors
    /// [`MazeError::NotFound`] if either endpoint is absent.
    pub fn add_edge(&mut self, edge: Edge<T>) -> Result<bool> {
        for end in [&edge.from, &edge.to] {
            if !self.nodes.contains(end) {
                return Err(MazeError::not_found("node", &end.value));
            }
        }
        if self.edges.contains(&edge) {
            return Ok(false);
        }

        self.index(&edge.from, edge.clone());
        if edge.to != edge.from {
            self.index(&edge.to, edge.clone());
        }
        self.edges.insert(edge);
        Ok(true)
    }

    /// Removes an edge.
    ///
    /// Edges are matched by their `(from, to)` pair, see [`Edge`].
    ///
    /// # Errors
    /// [`MazeError::NotFound`] if the edge is absent.
    pub fn remove_edge(&mut self, edge: &Edge<T>) -> Result<Edge<T>> {
        let removed = self
            .edges
            .take(edge)
            .ok_or_else(|| MazeError::not_found("edge", &(&edge.from.value, &edge.to.value)))?;
        self.unindex(&removed.from, &removed);
        self.unindex(&removed.to, &removed);
        Ok(removed)
    }

    /// Edges touching a node, found through the adjacency index.
    ///
    /// # Time Complexity
    /// *O*(1) to find the slice, *O*(*degree*) to walk it.
    ///
    /// # Errors
    /// [`MazeError::NotFound`] if the node is absent.
    pub fn edges_touching(&self, node: &Node<T>) -> Result<&[Edge<T>]> {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .ok_or_else(|| MazeError::not_found("node", &node.value))
    }

    /// Edges touching a node, found by scanning every edge.
    ///
    /// Kept to cross-check the adjacency index; use
    /// [`Graph::edges_touching`] instead.
    ///
    /// # Time Complexity
    /// *O*(*E*).
    pub fn edges_touching_scan(&self, node: &Node<T>) -> Result<Vec<&Edge<T>>> {
        if !self.nodes.contains(node) {
            return Err(MazeError::not_found("node", &node.value));
        }
        Ok(self.edges.iter().filter(|e| e.touches(node)).collect())
    }

    /// Nodes joined to `node` by an edge.
    pub fn neighbors<'g>(
        &'g self,
        node: &'g Node<T>,
    ) -> Result<impl Iterator<Item = &'g Node<T>> + 'g> {
        Ok(self
            .edges_touching(node)?
            .iter()
            .filter_map(move |e| e.other(node)))
    }

    /// The edge joining `a` and `b`, in either orientation.
    pub fn edge_between(&self, a: &Node<T>, b: &Node<T>) -> Option<&Edge<T>> {
        self.adjacency
            .get(a)
            .and_then(|edges| edges.iter().find(|e| e.connects(a, b)))
    }

    /// Whether the node is in the graph.
    pub fn contains_node(&self, node: &Node<T>) -> bool {
        self.nodes.contains(node)
    }

    /// Whether an edge with the same `(from, to)` pair is in the graph.
    pub fn contains_edge(&self, edge: &Edge<T>) -> bool {
        self.edges.contains(edge)
    }

    /// Get the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterates over the nodes in arbitrary order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node<T>> {
        self.nodes.iter()
    }

    /// Iterates over the edges in arbitrary order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge<T>> {
        self.edges.iter()
    }

    /// Sum of all edge costs.
    pub fn total_cost(&self) -> f64 {
        self.edges.iter().map(|e| e.cost.into_inner()).sum()
    }

    fn index(&mut self, node: &Node<T>, edge: Edge<T>) {
        self.adjacency.entry(node.clone()).or_default().push(edge);
    }

    fn unindex(&mut self, node: &Node<T>, edge: &Edge<T>) {
        if let Some(edges) = self.adjacency.get_mut(node) {
            edges.retain(|e| e != edge);
        }
    }
}

//---------------------------------------------------------------
// Unit Tests
//---------------------------------------------------------------
