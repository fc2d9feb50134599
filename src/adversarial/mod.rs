//! Depth-bounded adversarial game-tree search.
//!
//! Three strategies over the [`GameState`] port: [`Minimax`] (opponents
//! play adversarially), [`AlphaBeta`] (same values, pruned expansion),
//! and [`Expectimax`] (opponents play uniformly at random). Each strategy
//! holds a round-counted depth limit and a pluggable leaf evaluator.
//!
//! All three break root ties the same way: the first action reaching the
//! best value is kept, and an incumbent is only replaced on strict
//! improvement. This keeps the alpha-beta root choice identical to plain
//! minimax.

pub mod alpha_beta;
pub mod expectimax;
pub mod minimax;

pub use alpha_beta::AlphaBeta;
pub use expectimax::Expectimax;
pub use minimax::Minimax;

use crate::{error::Result, ports::GameState};

/// A method of choosing a move for the controlled agent.
pub trait Strategy<G: GameState> {
    /// Select an action for agent 0 in the given state.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoLegalActions`] when the controlled agent
    /// has no legal actions (terminal state).
    fn choose_action(&mut self, state: &G) -> Result<G::Action>;
}

/// Assigns a heuristic scalar to a state, higher meaning better for the
/// controlled agent. Used at terminal nodes and at the depth cutoff.
pub trait Evaluator<G: GameState> {
    fn evaluate(&self, state: &G) -> f64;
}

/// The default leaf evaluator: the raw game score.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreEvaluator;

impl<G: GameState> Evaluator<G> for ScoreEvaluator {
    fn evaluate(&self, state: &G) -> f64 {
        state.score()
    }
}

impl<G: GameState, F: Fn(&G) -> f64> Evaluator<G> for F {
    fn evaluate(&self, state: &G) -> f64 {
        self(state)
    }
}

/// Successor bookkeeping shared by the three strategies: who moves after
/// `agent`, and at what depth. The round counter advances only when the
/// turn wraps back to the controlled agent.
fn next_turn<G: GameState>(state: &G, agent: usize, depth: usize) -> (usize, usize) {
    let next_agent = (agent + 1) % state.agent_count();
    let next_depth = if next_agent == 0 { depth + 1 } else { depth };
    (next_agent, next_depth)
}
