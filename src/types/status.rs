//! Definition for the [`Status`] type, implemented by an enum.

/// Represents the progress of a [`Solver`](crate::solver::engine::Solver).
#[derive(Debug, Clone, Copy, PartialEq, Hash, Eq, Default)]
pub enum Status {
    /// No search is configured.
    #[default]
    Idle,
    /// A search is configured and the goal has not been dequeued yet.
    Searching,
    /// The goal was dequeued; the path is final.
    Finished,
}
