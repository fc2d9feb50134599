//! Heuristic scoring of pursuit-game states.
//!
//! Two scoring functions over the [`PursuitState`] port, both returning a
//! scalar where higher is better for the controlled agent:
//!
//! - [`reflex_score`] rates a candidate action by simulating it one step,
//! - [`survey_score`] rates the current state only and is the usual leaf
//!   evaluator for the depth-bounded strategies in [`crate::adversarial`].
//!
//! Every distance term has an explicit fallback so an empty food layout
//! or ghost roster never reduces over an empty set.

use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};

use crate::{
    adversarial::Strategy,
    error::{Error, Result},
    ports::PursuitState,
    types::Point,
};

/// Stand-in nearest-food distance when no food remains.
pub const NO_FOOD_DISTANCE: f64 = 5.0;

/// Stand-in nearest-ghost distance when no ghost threatens.
pub const NO_GHOST_DISTANCE: f64 = 1000.0;

fn nearest_distance(origin: Point, targets: impl IntoIterator<Item = Point>) -> Option<f64> {
    targets
        .into_iter()
        .map(|target| f64::from(origin.manhattan_distance(target)))
        .min_by(|a, b| a.total_cmp(b))
}

/// Score a candidate action for the controlled agent by one-step lookahead.
///
/// Simulates `action`, then combines a reciprocal-distance bonus toward
/// the nearest food, a reciprocal-distance penalty for the nearest
/// threatening (non-frightened) ghost, and the score delta of the move.
/// The small denominator offsets keep the terms bounded at distance zero.
pub fn reflex_score<G: PursuitState>(state: &G, action: &G::Action) -> f64 {
    let next = state.successor(0, action);
    let position = next.agent_position();

    let food_distance = nearest_distance(position, next.food()).unwrap_or(NO_FOOD_DISTANCE);
    let ghost_distance = nearest_distance(
        position,
        next.ghosts()
            .into_iter()
            .filter(|ghost| ghost.is_threatening())
            .map(|ghost| ghost.position),
    )
    .unwrap_or(NO_GHOST_DISTANCE);

    let food_bonus = 1.0 / (food_distance + 0.5);
    let ghost_penalty = 1.0 / (ghost_distance + 0.8);
    let score_delta = next.score() - state.score();

    food_bonus - ghost_penalty + score_delta
}

/// Score the current state without simulating any action.
///
/// Unweighted sum of: reciprocal distance to the nearest ghost (any fear
/// status), reciprocal distance to the nearest food, the minimum
/// remaining fear timer, the negative remaining-food count, and the raw
/// game score. Suitable as the leaf evaluator for depth-bounded search.
pub fn survey_score<G: PursuitState>(state: &G) -> f64 {
    let position = state.agent_position();
    let ghosts = state.ghosts();
    let food = state.food();

    let ghost_distance = nearest_distance(position, ghosts.iter().map(|ghost| ghost.position))
        .unwrap_or(NO_GHOST_DISTANCE);
    // No food left scores as distance zero: the best possible food term.
    let food_distance = nearest_distance(position, food.iter().copied()).unwrap_or(0.0);
    let fear_left = ghosts
        .iter()
        .map(|ghost| ghost.fear_timer)
        .min()
        .unwrap_or(0);

    let ghost_term = 1.0 / (ghost_distance + 1.0);
    let food_term = 1.0 / (food_distance + 1.0);
    let remaining_food = -(food.len() as f64);

    ghost_term + food_term + f64::from(fear_left) + remaining_food + state.score()
}

/// A reflex strategy: scores each legal action with [`reflex_score`] and
/// picks uniformly at random among the best.
#[derive(Debug)]
pub struct Reflex {
    rng: StdRng,
}

impl Reflex {
    /// Create a reflex strategy with a nondeterministic tie-break.
    pub fn new() -> Self {
        Reflex {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Fix the tie-break seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }
}

impl Default for Reflex {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: PursuitState> Strategy<G> for Reflex {
    fn choose_action(&mut self, state: &G) -> Result<G::Action> {
        let actions = state.legal_actions(0);
        let scores: Vec<f64> = actions
            .iter()
            .map(|action| reflex_score(state, action))
            .collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let candidates: Vec<&G::Action> = actions
            .iter()
            .zip(&scores)
            .filter(|(_, score)| **score == best)
            .map(|(action, _)| action)
            .collect();
        candidates
            .choose(&mut self.rng)
            .map(|action| (*action).clone())
            .ok_or(Error::NoLegalActions { agent: 0 })
    }
}
