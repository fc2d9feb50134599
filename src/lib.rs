//! Decision-making algorithms over explicit state-transition models
//!
//! This crate provides:
//! - Uninformed graph search (DFS, BFS, uniform-cost, A*) over an
//!   abstract search-problem port
//! - Depth-bounded adversarial game-tree search (minimax, alpha-beta,
//!   expectimax) with pluggable leaf evaluation
//! - Heuristic evaluation functions for pursuit-style grid games
//! - Batch value iteration over a finite MDP, with JSON snapshots of the
//!   solved value function
//!
//! The crate never constructs game states, search problems, or MDPs; it
//! consumes the trait ports in [`ports`] and is otherwise pure,
//! single-threaded computation.

pub mod adversarial;
pub mod error;
pub mod evaluation;
pub mod ports;
pub mod search;
pub mod types;
pub mod value_iteration;

pub use adversarial::{AlphaBeta, Evaluator, Expectimax, Minimax, ScoreEvaluator, Strategy};
pub use error::{Error, Result};
pub use evaluation::Reflex;
pub use ports::{GameState, MarkovDecisionProcess, PursuitState, SearchProblem};
pub use types::{Discount, GhostStatus, Point, SearchDepth};
pub use value_iteration::{SavedValueFunction, ValueIteration};
