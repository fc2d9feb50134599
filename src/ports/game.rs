//! Game state port - abstraction over turn-based multi-agent games.

use crate::types::{GhostStatus, Point};

/// A snapshot of a turn-based multi-agent game.
///
/// Agent index 0 is always the controlled (maximizing) agent; indices
/// `1..agent_count()` are opponents. The search algorithms treat states
/// as immutable: they only read predicates and request successors, so
/// implementations are free to share structure between snapshots.
pub trait GameState: Clone {
    /// The type of moves available to agents.
    type Action: Clone + PartialEq + std::fmt::Debug;

    /// Total number of agents in the game, controlled agent included.
    fn agent_count(&self) -> usize;

    /// Legal actions for the given agent in this state.
    ///
    /// Terminal states return an empty list for every agent.
    fn legal_actions(&self, agent: usize) -> Vec<Self::Action>;

    /// The state reached when `agent` plays `action`.
    fn successor(&self, agent: usize, action: &Self::Action) -> Self;

    /// Whether this state is a win for the controlled agent.
    fn is_win(&self) -> bool;

    /// Whether this state is a loss for the controlled agent.
    fn is_lose(&self) -> bool;

    /// Running game score (higher is better for the controlled agent).
    fn score(&self) -> f64;
}

/// Extension of [`GameState`] for pursuit-style grid games.
///
/// Exposes the positional features consumed by the evaluation functions
/// in [`crate::evaluation`]: where the controlled agent stands, which
/// cells still hold food, and where the ghosts are along with their fear
/// timers. The tree-search strategies themselves never look at these.
pub trait PursuitState: GameState {
    /// Grid position of the controlled agent.
    fn agent_position(&self) -> Point;

    /// Positions of all remaining food pellets.
    fn food(&self) -> Vec<Point>;

    /// Position and fear status of every ghost.
    fn ghosts(&self) -> Vec<GhostStatus>;
}
