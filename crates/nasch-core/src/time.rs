//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter — one tick per call to
//! `Sim::step`.  There is no wall-clock mapping: the model is a pure
//! discrete-time cellular automaton and all schedule arithmetic is exact
//! integer arithmetic on tick counts.

use std::fmt;

/// An absolute simulation tick counter.
///
/// Stored as `u64`: at one tick per nanosecond a u64 lasts ~585 years, far
/// longer than any conceivable run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
