//! Plain data row types written by output backends.

/// A snapshot of one vehicle's state at a given tick.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleSnapshotRow {
    pub vehicle_id: u32,
    pub tick:       u64,
    pub position:   u32,
    pub speed:      u32,
    /// `"normal"` or `"cautious"` — the `Display` form of the profile.
    pub profile:    String,
}

/// Summary statistics for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    /// Vehicles that changed cell this tick.
    pub moved:      u64,
    /// Mean speed across the population.  `None` for an empty population —
    /// the mean is undefined there and the row records it as an empty field
    /// rather than a fake zero.
    pub mean_speed: Option<f64>,
}
