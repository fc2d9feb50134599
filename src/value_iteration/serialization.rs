//! Value function serialization support
//!
//! Provides save/load for solved value functions so a planning run can
//! be inspected or reused without re-sweeping.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    error::Result,
    ports::MarkovDecisionProcess,
    types::Discount,
    value_iteration::ValueIteration,
};

/// Version of the save format (for future compatibility)
pub const SAVE_FORMAT_VERSION: u32 = 1;

/// Serializable snapshot of a solved value iteration run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedValueFunction<S, A> {
    /// Save format version.
    pub version: u32,
    /// Discount factor the solver ran with.
    pub discount: Discount,
    /// Number of sweeps run at construction.
    pub sweeps: usize,
    /// Per-state value and greedy action, in the MDP's state order.
    pub entries: Vec<ValueEntry<S, A>>,
}

/// One state's solved value and greedy action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueEntry<S, A> {
    pub state: S,
    pub value: f64,
    /// `None` for terminal states.
    pub policy: Option<A>,
}

impl<M: MarkovDecisionProcess> ValueIteration<M> {
    /// Build a serializable snapshot of this solution.
    pub fn snapshot(&self) -> SavedValueFunction<M::State, M::Action> {
        let entries = self
            .mdp()
            .states()
            .into_iter()
            .map(|state| {
                let value = self.value(&state);
                let policy = self.policy(&state);
                ValueEntry {
                    state,
                    value,
                    policy,
                }
            })
            .collect();
        SavedValueFunction {
            version: SAVE_FORMAT_VERSION,
            discount: self.discount(),
            sweeps: self.sweeps(),
            entries,
        }
    }

    /// Write this solution as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if encoding fails.
    pub fn save<W: Write>(&self, writer: W) -> Result<()>
    where
        M::State: Serialize,
        M::Action: Serialize,
    {
        serde_json::to_writer(writer, &self.snapshot())?;
        Ok(())
    }
}

impl<S: DeserializeOwned, A: DeserializeOwned> SavedValueFunction<S, A> {
    /// Read a snapshot previously written by
    /// [`ValueIteration::save`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Serialization`] if decoding fails.
    pub fn load<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
