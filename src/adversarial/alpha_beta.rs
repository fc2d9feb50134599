//! Minimax with alpha-beta pruning.

use crate::{
    adversarial::{Evaluator, ScoreEvaluator, Strategy, next_turn},
    error::{Error, Result},
    ports::GameState,
    types::SearchDepth,
};

/// Depth-bounded minimax with an (alpha, beta) pruning window.
///
/// Alpha is the best value the maximizer can already guarantee on the
/// current path, beta the best the minimizer can. Subtrees whose value
/// provably cannot affect the root are skipped; the returned root value
/// and action are identical to plain [`crate::adversarial::Minimax`].
#[derive(Debug, Clone)]
pub struct AlphaBeta<E = ScoreEvaluator> {
    depth: SearchDepth,
    evaluator: E,
}

impl AlphaBeta<ScoreEvaluator> {
    /// Create an alpha-beta strategy using the raw game score at leaves.
    pub fn new(depth: SearchDepth) -> Self {
        AlphaBeta {
            depth,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> AlphaBeta<E> {
    /// Replace the leaf evaluator.
    pub fn with_evaluator<E2>(self, evaluator: E2) -> AlphaBeta<E2> {
        AlphaBeta {
            depth: self.depth,
            evaluator,
        }
    }

    /// The configured depth limit.
    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    /// Minimax value of `state` treated as a max node at the root.
    pub fn root_value<G>(&self, state: &G) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.value(state, 0, 0, f64::NEG_INFINITY, f64::INFINITY)
    }

    fn value<G>(&self, state: &G, depth: usize, agent: usize, alpha: f64, beta: f64) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_win() || state.is_lose() || depth == self.depth.rounds() {
            return self.evaluator.evaluate(state);
        }
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            return self.evaluator.evaluate(state);
        }

        let (next_agent, next_depth) = next_turn(state, agent, depth);
        let mut alpha = alpha;
        let mut beta = beta;
        if agent == 0 {
            let mut best = f64::NEG_INFINITY;
            for action in &actions {
                let child =
                    self.value(&state.successor(agent, action), next_depth, next_agent, alpha, beta);
                best = best.max(child);
                if best > beta {
                    // Beta cut-off: the minimizer above will never allow this.
                    return best;
                }
                alpha = alpha.max(best);
            }
            best
        } else {
            let mut best = f64::INFINITY;
            for action in &actions {
                let child =
                    self.value(&state.successor(agent, action), next_depth, next_agent, alpha, beta);
                best = best.min(child);
                if best < alpha {
                    // Alpha cut-off: the maximizer above already has better.
                    return best;
                }
                beta = beta.min(best);
            }
            best
        }
    }
}

impl<G, E> Strategy<G> for AlphaBeta<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn choose_action(&mut self, state: &G) -> Result<G::Action> {
        let (next_agent, next_depth) = next_turn(state, 0, 0);
        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best: Option<(G::Action, f64)> = None;
        for action in state.legal_actions(0) {
            let value = self.value(
                &state.successor(0, &action),
                next_depth,
                next_agent,
                alpha,
                beta,
            );
            let improved = match &best {
                Some((_, incumbent)) => value > *incumbent,
                None => true,
            };
            if improved {
                best = Some((action, value));
            }
            let running = best.as_ref().map(|(_, v)| *v).unwrap_or(f64::NEG_INFINITY);
            if running > beta {
                break;
            }
            alpha = alpha.max(running);
        }
        best.map(|(action, _)| action)
            .ok_or(Error::NoLegalActions { agent: 0 })
    }
}
