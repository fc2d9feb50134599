//! MDP port - abstraction over finite Markov decision processes.

use std::hash::Hash;

/// A finite Markov decision process.
///
/// The value iteration solver in [`crate::value_iteration`] consumes this
/// port and nothing else. Terminal states are states with no legal
/// actions; `transitions` must return probabilities summing to 1 for any
/// legal `(state, action)` pair. The solver does not validate this, a
/// malformed model is a caller contract violation.
pub trait MarkovDecisionProcess {
    /// The type of MDP states.
    type State: Clone + Eq + Hash;
    /// The type of actions.
    type Action: Clone + PartialEq;

    /// Every state in the process.
    fn states(&self) -> Vec<Self::State>;

    /// Legal actions in `state`; empty for terminal states.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The `(next_state, probability)` distribution of taking `action` in
    /// `state`.
    fn transitions(&self, state: &Self::State, action: &Self::Action)
    -> Vec<(Self::State, f64)>;

    /// Immediate reward for the transition `state --action--> next`.
    fn reward(&self, state: &Self::State, action: &Self::Action, next: &Self::State) -> f64;

    /// Whether `state` is terminal.
    fn is_terminal(&self, state: &Self::State) -> bool;
}
