//! Ports (trait boundaries) for external state models.
//!
//! The algorithms in this crate never construct game states, search
//! problems, or MDPs; they only call the operations enumerated here.
//! Callers implement these traits for their own models, which also makes
//! it straightforward to substitute test doubles.

pub mod game;
pub mod mdp;
pub mod search_problem;

pub use game::{GameState, PursuitState};
pub use mdp::MarkovDecisionProcess;
pub use search_problem::SearchProblem;
