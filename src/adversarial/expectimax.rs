//! Expectimax: adversaries modeled as uniformly random.

use crate::{
    adversarial::{Evaluator, ScoreEvaluator, Strategy, next_turn},
    error::{Error, Result},
    ports::GameState,
    types::SearchDepth,
};

/// Depth-bounded expectimax: agent 0 maximizes, every opponent node is a
/// chance node whose value is the arithmetic mean over its legal actions.
///
/// No pruning happens here; an expectation cannot be bounded the way a
/// min node can.
#[derive(Debug, Clone)]
pub struct Expectimax<E = ScoreEvaluator> {
    depth: SearchDepth,
    evaluator: E,
}

impl Expectimax<ScoreEvaluator> {
    /// Create an expectimax strategy using the raw game score at leaves.
    pub fn new(depth: SearchDepth) -> Self {
        Expectimax {
            depth,
            evaluator: ScoreEvaluator,
        }
    }
}

impl<E> Expectimax<E> {
    /// Replace the leaf evaluator.
    pub fn with_evaluator<E2>(self, evaluator: E2) -> Expectimax<E2> {
        Expectimax {
            depth: self.depth,
            evaluator,
        }
    }

    /// The configured depth limit.
    pub fn depth(&self) -> SearchDepth {
        self.depth
    }

    /// Expectimax value of `state` treated as a max node at the root.
    pub fn root_value<G>(&self, state: &G) -> f64
    where
        G: GameState,
        E: Evaluator<G>,
    {
        self.value(state, 0, 0)
    }

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
            return self.evaluator.evaluate(state);
        }

        let (next_agent, next_depth) = next_turn(state, agent, depth);
        let children = actions
            .iter()
            .map(|action| self.value(&state.successor(agent, action), next_depth, next_agent));

        if agent == 0 {
            children.fold(f64::NEG_INFINITY, f64::max)
        } else {
            // Chance node: uniform average over the opponent's moves.
            children.sum::<f64>() / actions.len() as f64
        }
    }
}

impl<G, E> Strategy<G> for Expectimax<E>
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
