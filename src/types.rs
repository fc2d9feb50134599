//! Newtype wrappers for improved type safety and domain modeling.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A discount factor γ for future rewards (must lie in [0, 1)).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Discount(f64);

impl Discount {
    /// Create a new discount factor, validating it lies in [0, 1).
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDiscount`] if the value is negative,
    /// not finite, or at least 1.
    pub fn new(value: f64) -> Result<Self, crate::Error> {
        if value.is_finite() && (0.0..1.0).contains(&value) {
            Ok(Discount(value))
        } else {
            Err(crate::Error::InvalidDiscount { value })
        }
    }

    /// Get the inner value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<Discount> for f64 {
    fn from(discount: Discount) -> Self {
        discount.0
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A depth limit for adversarial search, counted in full rounds.
///
/// One round is one move by the maximizing agent followed by one move
/// by every opponent, so a depth of 2 means every agent moves twice
/// before leaves are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SearchDepth(usize);

impl SearchDepth {
    /// Create a new search depth, validating it is at least one round.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDepth`] if the depth is zero.
    pub fn new(rounds: usize) -> Result<Self, crate::Error> {
        if rounds >= 1 {
            Ok(SearchDepth(rounds))
        } else {
            Err(crate::Error::InvalidDepth { rounds })
        }
    }

    /// Get the number of rounds.
    pub fn rounds(&self) -> usize {
        self.0
    }
}

impl fmt::Display for SearchDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell position on the game grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Manhattan (L1) distance to another point.
    pub fn manhattan_distance(&self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position and fear status of one opponent, as consumed by the
/// evaluation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GhostStatus {
    /// Current grid position.
    pub position: Point,
    /// Remaining moves this ghost stays frightened; 0 means it is a threat.
    pub fear_timer: u32,
}

impl GhostStatus {
    /// Whether this ghost currently endangers the controlled agent.
    pub fn is_threatening(&self) -> bool {
        self.fear_timer == 0
    }
}
