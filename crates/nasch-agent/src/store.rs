//! Core vehicle storage: `VehicleStore` (SoA data).

use nasch_core::VehicleId;

use crate::DriverProfile;

/// Position sentinel for a vehicle that has not yet been placed on the grid.
pub const UNPLACED: u32 = u32::MAX;

/// Structure-of-Arrays storage for all vehicle state.
///
/// Every `Vec` field has exactly `count` elements; the `VehicleId` value is
/// the index into all of them:
///
/// ```ignore
/// let v = store.speed[id.index()];  // O(1), cache-friendly
/// ```
///
/// Invariants maintained by `nasch-sim`:
/// - `speed[i] <= max_speed[i]` at all times;
/// - `position[i]` is the unique occupied grid cell holding `VehicleId(i)`.
#[derive(Default)]
pub struct VehicleStore {
    /// Number of vehicles.  Equals the length of every SoA `Vec`.
    pub count: usize,

    /// Current speed in cells per tick.
    pub speed: Vec<u32>,

    /// Per-vehicle speed ceiling.
    pub max_speed: Vec<u32>,

    /// Current grid cell, or [`UNPLACED`] before placement.
    pub position: Vec<u32>,

    /// Gap-measurement profile.
    pub profile: Vec<DriverProfile>,
}

impl VehicleStore {
    /// `true` if there are no vehicles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterator over all `VehicleId`s in ascending index order.
    pub fn vehicle_ids(&self) -> impl Iterator<Item = VehicleId> + '_ {
        (0..self.count as u32).map(VehicleId)
    }

    /// Append one vehicle with `speed = 0` and an [`UNPLACED`] position,
    /// returning its id.
    ///
    /// The caller is responsible for placing the vehicle on the grid and
    /// writing `position` before the next step.
    pub fn push_vehicle(&mut self, max_speed: u32, profile: DriverProfile) -> VehicleId {
        let id = VehicleId(self.count as u32);
        self.speed.push(0);
        self.max_speed.push(max_speed);
        self.position.push(UNPLACED);
        self.profile.push(profile);
        self.count += 1;
        id
    }

    /// Count of vehicles with the given profile.
    pub fn profile_count(&self, profile: DriverProfile) -> usize {
        self.profile.iter().filter(|&&p| p == profile).count()
    }
}
