//! Search problem port - abstraction over single-agent path-finding.

use std::hash::Hash;

/// A single-agent search problem over a finite state space.
///
/// Implementations define the start state, the goal predicate, and the
/// successor relation; the algorithms in [`crate::search`] supply the
/// frontier discipline. States must be hashable so graph search can
/// suppress re-expansion on cyclic spaces.
pub trait SearchProblem {
    /// The type of search states.
    type State: Clone + Eq + Hash;
    /// The type of actions connecting states.
    type Action: Clone;

    /// The state search begins from.
    fn start_state(&self) -> Self::State;

    /// Whether the given state satisfies the goal.
    fn is_goal(&self, state: &Self::State) -> bool;

    /// All `(successor, action, step_cost)` triples reachable in one step.
    fn successors(&self, state: &Self::State) -> Vec<(Self::State, Self::Action, f64)>;
}
