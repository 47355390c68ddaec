//! Driver profiles — the two-variant behavior tag.
//!
//! Rather than trait dispatch per vehicle kind, the profile is a `Copy` tag
//! consumed by the single shared step function: the only behavioral
//! difference is where the forward gap scan starts.

use std::fmt;

/// Cells of cushion a cautious driver keeps to the vehicle ahead: its gap
/// scan starts this many cells forward instead of one.
pub const BRAKING_DISTANCE: u32 = 2;

/// How a vehicle measures the gap to the vehicle ahead.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum DriverProfile {
    /// Standard Nagel–Schreckenberg driver: gap scan starts at the next cell.
    #[default]
    Normal,
    /// Reduced-speed profile: the gap scan starts [`BRAKING_DISTANCE`] cells
    /// forward, so the vehicle brakes earlier and rests with a cushion.
    Cautious,
}

impl DriverProfile {
    /// First cell (relative to the vehicle's position) inspected by the gap
    /// scan.
    #[inline]
    pub fn gap_offset(self) -> u32 {
        match self {
            DriverProfile::Normal   => 1,
            DriverProfile::Cautious => BRAKING_DISTANCE,
        }
    }
}

impl fmt::Display for DriverProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverProfile::Normal   => write!(f, "normal"),
            DriverProfile::Cautious => write!(f, "cautious"),
        }
    }
}
