//! Batch value iteration over a finite MDP.
//!
//! [`ValueIteration::solve`] runs a fixed number of synchronous
//! (Jacobi-style) Bellman sweeps at construction time; everything after
//! that is a pure read accessor. Each sweep computes every state's best
//! Q-value against the *previous* sweep's table exclusively and commits
//! all updates at once: a state never observes a value produced earlier
//! in the same sweep.

pub mod serialization;

pub use serialization::{SAVE_FORMAT_VERSION, SavedValueFunction, ValueEntry};

use std::collections::HashMap;

use crate::{ports::MarkovDecisionProcess, types::Discount};

/// A solved value function and its induced greedy policy.
pub struct ValueIteration<M: MarkovDecisionProcess> {
    mdp: M,
    discount: Discount,
    sweeps: usize,
    values: HashMap<M::State, f64>,
}

impl<M: MarkovDecisionProcess> ValueIteration<M> {
    /// Run exactly `sweeps` synchronous sweeps over `mdp` and return the
    /// resulting value function.
    pub fn solve(mdp: M, discount: Discount, sweeps: usize) -> Self {
        let mut solver = ValueIteration {
            mdp,
            discount,
            sweeps,
            values: HashMap::new(),
        };
        for _ in 0..sweeps {
            solver.sweep();
        }
        solver
    }

    /// One synchronous Bellman sweep: new values are computed from the
    /// frozen previous table, then committed together. States with no
    /// legal actions (terminal) are left untouched.
    fn sweep(&mut self) {
        let mut updates: Vec<(M::State, f64)> = Vec::new();
        for state in self.mdp.states() {
            let mut best: Option<f64> = None;
            for action in self.mdp.actions(&state) {
                let q = self.q_value(&state, &action);
                best = Some(match best {
                    Some(current) => current.max(q),
                    None => q,
                });
            }
            if let Some(value) = best {
                updates.push((state, value));
            }
        }
        self.values.extend(updates);
    }

    /// Value estimate for `state`; unseen states default to 0.
    pub fn value(&self, state: &M::State) -> f64 {
        self.values.get(state).copied().unwrap_or(0.0)
    }

    /// Q-value of `(state, action)` under the current value table:
    /// expected immediate reward plus discounted next-state value.
    pub fn q_value(&self, state: &M::State, action: &M::Action) -> f64 {
        self.mdp
            .transitions(state, action)
            .into_iter()
            .map(|(next, probability)| {
                probability
                    * (self.mdp.reward(state, action, &next)
                        + self.discount.value() * self.value(&next))
            })
            .sum()
    }

    /// Greedy action in `state` under the current values, or `None` when
    /// the state has no legal actions. Ties keep the first action in the
    /// MDP's iteration order.
    pub fn policy(&self, state: &M::State) -> Option<M::Action> {
        let mut best: Option<(M::Action, f64)> = None;
        for action in self.mdp.actions(state) {
            let q = self.q_value(state, &action);
            let improved = match &best {
                Some((_, incumbent)) => q > *incumbent,
                None => true,
            };
            if improved {
                best = Some((action, q));
            }
        }
        best.map(|(action, _)| action)
    }

    /// The discount factor this solver was constructed with.
    pub fn discount(&self) -> Discount {
        self.discount
    }

    /// The number of sweeps run at construction.
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// The underlying MDP.
    pub fn mdp(&self) -> &M {
        &self.mdp
    }
}
