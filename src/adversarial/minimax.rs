//! Plain minimax over a multi-agent game tree.

use crate::{
    adversarial::{Evaluator, ScoreEvaluator, Strategy, next_turn},
    error::{Error, Result},
    ports::GameState,
    types::SearchDepth,
};

/// Depth-bounded minimax: agent 0 maximizes, every opponent minimizes.
///
/// Depth counts full rounds. A round ends when the last opponent has
/// moved, so the cutoff fires only after every agent has moved `depth`
/// times.
#[derive(Debug, Clone)]
pub struct Minimax<E = ScoreEvaluator> {
    depth: SearchDepth,
    evaluator: E,
}

impl Minimax<ScoreEvaluator> {
    /// Create a minimax strategy using the raw game score at leaves.
    pub fn new(depth: SearchDepth) -> Self {
        Minimax {
            depth,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> Minimax<E> {
    /// Replace the leaf evaluator.
    pub fn with_evaluator<E2>(self, evaluator: E2) -> Minimax<E2> {
        Minimax {
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
        self.value(state, 0, 0)
    }

    /// Single recursive dispatch: the node's role (max or min) follows
    /// from the agent index alone.
    fn value<G>(&self, state: &G, depth: usize, agent: usize) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        if state.is_win() || state.is_lose() || depth == self.depth.rounds() {
            return self.evaluator.evaluate(state);
        }
        let actions = state.legal_actions(agent);
        if actions.is_empty() {
            // Stuck non-terminal state: score it as a leaf rather than
            // fold over an empty action set.
            return self.evaluator.evaluate(state);
        }

        let (next_agent, next_depth) = next_turn(state, agent, depth);
        let children = actions
            .iter()
            .map(|action| self.value(&state.successor(agent, action), next_depth, next_agent));

        if agent == 0 {
            children.fold(f64::NEG_INFINITY, f64::max)
        } else {
            children.fold(f64::INFINITY, f64::min)
        }
    }
}

impl<G, E> Strategy<G> for Minimax<E>
where
    G: GameState,
    E: Evaluator<G>,
{
    fn choose_action(&mut self, state: &G) -> Result<G::Action> {
        let (next_agent, next_depth) = next_turn(state, 0, 0);
        let mut best: Option<(G::Action, f64)> = None;
        for action in state.legal_actions(0) {
            let value = self.value(&state.successor(0, &action), next_depth, next_agent);
            match &best {
                Some((_, incumbent)) if value <= *incumbent => {}
                _ => best = Some((action, value)),
            }
        }
        best.map(|(action, _)| action)
            .ok_or(Error::NoLegalActions { agent: 0 })
    }
}
