//! The path finding half of the maze library.
//!
//! The engine module walks a graph from a start node towards a goal one
//! expansion at a time, so a caller can draw the search as it runs.
//! Breadth-first and depth-first search share every line of code except
//! the end of the frontier an entry is taken from.

/// The solver engine module.
pub mod engine {
    use std::collections::{HashSet, VecDeque};
    use std::fmt::Debug;
    use std::hash::Hash;

    use crate::{
        error::{MazeError, Result},
        graph::Graph,
        mode::SearchMode,
        node::Node,
        status::Status,
    };

    /// A discovered node and the entry it was discovered from.
    ///
    /// Entries live in an arena owned by the solver; `back` is an index
    /// into that arena and is [`None`] for the start node.
    #[derive(Debug, Clone)]
    struct Entry<T> {
        node: Node<T>,
        back: Option<usize>,
    }

    /// Pending entries, as arena indices.
    ///
    /// Entries are always pushed at the back. Breadth-first search takes
    /// from the front, depth-first search from the back.
    #[derive(Debug, Default)]
    struct Frontier {
        pending: VecDeque<usize>,
    }

    impl Frontier {
        fn push(&mut self, entry: usize) {
            self.pending.push_back(entry);
        }

        fn pop(&mut self, mode: SearchMode) -> Option<usize> {
            match mode {
                SearchMode::Bfs => self.pending.pop_front(),
                SearchMode::Dfs => self.pending.pop_back(),
            }
        }

        fn len(&self) -> usize {
            self.pending.len()
        }

        fn clear(&mut self) {
            self.pending.clear();
        }
    }

    /// An incremental BFS/DFS path finder over a borrowed graph.
    ///
    /// The graph is only read, so any number of solvers may share one.
    ///
    /// A solver is [`Status::Idle`] until [`Solver::set`] configures a
    /// search, [`Status::Searching`] while the goal has not been
    /// dequeued, and [`Status::Finished`] afterwards. [`Solver::reset`]
    /// returns it to idle from any state.
    #[derive(Debug)]
    pub struct Solver<'a, T> {
        graph: Option<&'a Graph<T>>,
        start: Option<Node<T>>,
        goal: Option<Node<T>>,
        mode: SearchMode,
        entries: Vec<Entry<T>>,
        frontier: Frontier,
        visited: HashSet<Node<T>>,
        path: Vec<Node<T>>,
        status: Status,
    }

    impl<T> Default for Solver<'_, T> {
        fn default() -> Self {
            Solver {
                graph: None,
                start: None,
                goal: None,
                mode: SearchMode::default(),
                entries: Vec::new(),
                frontier: Frontier::default(),
                visited: HashSet::new(),
                path: Vec::new(),
                status: Status::Idle,
            }
        }
    }

    impl<'a, T: Clone + Eq + Hash + Debug> Solver<'a, T> {
        /// Creates an idle solver.
        pub fn new() -> Self {
            Self::default()
        }

        /// Configures a search from `start` to `goal`.
        ///
        /// The frontier is seeded with `start`. Visited nodes and the
        /// current path are *not* cleared: call [`Solver::reset`] first
        /// when reusing a solver, or use [`Solver::start_search`].
        ///
        /// Coordinates are not validated here. A `start` outside the
        /// graph surfaces as [`MazeError::NotFound`] on the first step,
        /// a `goal` outside it as [`MazeError::Exhausted`].
        pub fn set(
            &mut self,
            graph: &'a Graph<T>,
            start: Node<T>,
            goal: Node<T>,
            mode: SearchMode,
        ) {
            debug!("{} search from {:?} to {:?}", mode, start.value, goal.value);
            self.graph = Some(graph);
            self.entries.push(Entry {
                node: start.clone(),
                back: None,
            });
            self.frontier.push(self.entries.len() - 1);
            self.start = Some(start);
            self.goal = Some(goal);
            self.mode = mode;
            if self.status == Status::Idle {
                self.status = Status::Searching;
            }
        }

        /// Clears any previous search, then configures a new one.
        pub fn start_search(
            &mut self,
            graph: &'a Graph<T>,
            start: Node<T>,
            goal: Node<T>,
            mode: SearchMode,
        ) {
            self.reset();
            self.set(graph, start, goal, mode);
        }

        /// Switches the strategy for the remaining steps.
        pub fn set_mode(&mut self, mode: SearchMode) {
            self.mode = mode;
        }

        /// Returns to idle, forgetting the graph, both endpoints, the
        /// frontier, the visited set and the path. The mode is kept.
        pub fn reset(&mut self) {
            debug!("Solver reset");
            self.graph = None;
            self.start = None;
            self.goal = None;
            self.entries.clear();
            self.frontier.clear();
            self.visited.clear();
            self.path.clear();
            self.status = Status::Idle;
        }

        /// Expands one node.
        ///
        /// Takes one entry from the frontier. If it holds the goal the
        /// search is finished. Otherwise every unvisited neighbor is
        /// pushed with a back-pointer to the entry, and the node is
        /// marked visited. A node can sit in the frontier more than
        /// once, and every one of its entries is expanded when taken.
        ///
        /// Once finished, further calls return the final path and change
        /// nothing.
        ///
        /// # Returns
        /// The path from `start` to the node just taken from the
        /// frontier. This tracks the search and is only the answer once
        /// the solver is finished.
        ///
        /// # Errors
        /// * [`MazeError::NotInitialized`] if no search is configured.
        /// * [`MazeError::Exhausted`] if the frontier is empty, meaning
        ///   the goal is unreachable.
        /// * [`MazeError::NotFound`] if the node taken is not in the
        ///   graph.
        pub fn step(&mut self) -> Result<&[Node<T>]> {
            match self.status {
                Status::Finished => return Ok(&self.path),
                Status::Idle => return Err(MazeError::NotInitialized),
                Status::Searching => {}
            }
            let graph = self.graph.ok_or(MazeError::NotInitialized)?;

            let index = match self.frontier.pop(self.mode) {
                Some(index) => index,
                None => {
                    warn!(
                        "Frontier empty after visiting {} nodes, goal {:?} unreachable",
                        self.visited.len(),
                        self.goal.as_ref().map(|g| &g.value)
                    );
                    return Err(MazeError::Exhausted);
                }
            };
            let node = self.entries[index].node.clone();
            trace!("Expanding {:?}", node.value);

            if self.goal.as_ref() == Some(&node) {
                self.status = Status::Finished;
                self.path = self.trace_back(index);
                debug!(
                    "Goal reached: {} nodes on the path, {} visited",
                    self.path.len(),
                    self.visited.len()
                );
                return Ok(&self.path);
            }

            for edge in graph.edges_touching(&node)? {
                if let Some(next) = edge.other(&node) {
                    if !self.visited.contains(next) {
                        self.entries.push(Entry {
                            node: next.clone(),
                            back: Some(index),
                        });
                        self.frontier.push(self.entries.len() - 1);
                    }
                }
            }
            self.visited.insert(node);

            self.path = self.trace_back(index);
            Ok(&self.path)
        }

        /// Steps until the goal is dequeued.
        ///
        /// # Returns
        /// The final path, `start` first and `goal` last.
        ///
        /// # Errors
        /// See [`Solver::step`].
        pub fn run_to_completion(&mut self) -> Result<&[Node<T>]> {
            while self.status != Status::Finished {
                self.step()?;
            }
            Ok(&self.path)
        }

        /// The current state of the search.
        pub fn status(&self) -> Status {
            self.status
        }

        /// Whether the goal has been dequeued.
        pub fn is_finished(&self) -> bool {
            self.status == Status::Finished
        }

        /// The path returned by the latest step.
        pub fn path(&self) -> &[Node<T>] {
            &self.path
        }

        /// The strategy in use.
        pub fn mode(&self) -> SearchMode {
            self.mode
        }

        /// The configured start node.
        pub fn start(&self) -> Option<&Node<T>> {
            self.start.as_ref()
        }

        /// The configured goal node.
        pub fn goal(&self) -> Option<&Node<T>> {
            self.goal.as_ref()
        }

        /// Number of nodes expanded so far.
        pub fn visited_count(&self) -> usize {
            self.visited.len()
        }

        /// Number of entries waiting in the frontier.
        pub fn frontier_len(&self) -> usize {
            self.frontier.len()
        }

        /// Follows back-pointers from `index` to the start.
        fn trace_back(&self, index: usize) -> Vec<Node<T>> {
            let mut path = Vec::new();
            let mut current = Some(index);
            while let Some(i) = current {
                let entry = &self.entries[i];
                path.push(entry.node.clone());
                current = entry.back;
            }
            path.reverse();
            path
        }
    }
}
