//! Helper functions for handing graphs to petgraph.

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use ordered_float::OrderedFloat;
use petgraph::graph::{NodeIndex, UnGraph};

use crate::graph::Graph;
use crate::node::Node;

/// A petgraph copy of a [`Graph`], plus a map from every node to its
/// index in the copy.
pub type PetGraph<T> = (
    UnGraph<Node<T>, OrderedFloat<f64>>,
    HashMap<Node<T>, NodeIndex>,
);

/// Copy a graph into a petgraph [`UnGraph`].
///
/// Edge weights are the edge costs. The returned map is needed to find
/// a node in the copy, since petgraph addresses nodes by index.
///
/// # Time Complexity
/// *O*(*V* + *E*).
pub fn to_petgraph<T: Clone + Eq + Hash + Debug>(graph: &Graph<T>) -> PetGraph<T> {
    let mut node_indices = HashMap::with_capacity(graph.node_count());
    let mut pet = UnGraph::with_capacity(graph.node_count(), graph.edge_count());

    for node in graph.nodes() {
        let index = pet.add_node(node.clone());
        node_indices.insert(node.clone(), index);
    }
    for edge in graph.edges() {
        // Edges only join nodes of the same graph, so both lookups hit.
        let from = node_indices.get(&edge.from);
        let to = node_indices.get(&edge.to);
        if let (Some(&from), Some(&to)) = (from, to) {
            pet.add_edge(from, to, edge.cost);
        }
    }
    (pet, node_indices)
}

#[cfg(test)]
mod petgraph_tests {
    use super::*;
    use crate::grid::grid_to_graph_with_rng;
    use crate::mst::get_mst;
    use petgraph::algo::{connected_components, dijkstra, min_spanning_tree};
    use petgraph::data::Element;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_counts_match() {
        let mut rng = StdRng::seed_from_u64(5);
        let grid = grid_to_graph_with_rng(4, 3, &mut rng).unwrap();
        let (pet, indices) = to_petgraph(&grid);
        assert_eq!(pet.node_count(), grid.node_count());
        assert_eq!(pet.edge_count(), grid.edge_count());
        assert_eq!(indices.len(), grid.node_count());
    }

    /// Prim's tree weighs the same as petgraph's Kruskal tree.
    #[test]
    fn test_mst_weight_matches_kruskal() {
        let mut rng = StdRng::seed_from_u64(21);
        for (width, height) in [(2, 2), (5, 5), (10, 7)] {
            let grid = grid_to_graph_with_rng(width, height, &mut rng).unwrap();
            let (pet, _) = to_petgraph(&grid);

            let kruskal: f64 = min_spanning_tree(&pet)
                .filter_map(|element| match element {
                    Element::Edge { weight, .. } => Some(weight.into_inner()),
                    Element::Node { .. } => None,
                })
                .sum();
            let prim = get_mst(&grid).unwrap().total_cost();
            assert!((kruskal - prim).abs() < 1e-9);
        }
    }

    #[test]
    fn test_maze_is_one_component() {
        let mut rng = StdRng::seed_from_u64(8);
        let grid = grid_to_graph_with_rng(9, 6, &mut rng).unwrap();
        let tree = get_mst(&grid).unwrap();
        let (pet, indices) = to_petgraph(&tree);
        assert_eq!(connected_components(&pet), 1);

        // Every cell is reachable from the corner.
        let start = indices[&Node::new((0, 0))];
        let reached = dijkstra(&pet, start, None, |_| 1usize);
        assert_eq!(reached.len(), 54);
    }
}
