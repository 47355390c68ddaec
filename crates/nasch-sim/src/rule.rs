//! The Nagel–Schreckenberg per-vehicle step rule.
//!
//! One free function, applied to every vehicle exactly once per tick in the
//! activation order.  No trait dispatch: the normal/cautious difference is
//! the `gap_offset` of the vehicle's [`DriverProfile`] tag.

use nasch_agent::VehicleStore;
use nasch_core::{SimRng, VehicleId};
use nasch_grid::RingGrid;

/// Count consecutive empty cells ahead of `position`, scanning from
/// `position + offset` until the first occupied cell.
///
/// The scan is bounded by the road length; on a ring the scanning vehicle's
/// own cell is occupied, so the bound is only reached if the grid has no
/// occupants at all.
pub(crate) fn gap_ahead(grid: &RingGrid, position: u32, offset: u32) -> u32 {
    let mut gap = 0;
    while gap < grid.len() && grid.is_empty(position + offset + gap) {
        gap += 1;
    }
    gap
}

/// Advance one vehicle by one tick.  Returns `true` if it changed cell.
///
/// The five phases, in order:
/// 1. accelerate by 1 up to `max_speed`;
/// 2. measure the forward gap from the profile's offset;
/// 3. cap speed at the gap;
/// 4. with `slowdown_probability`, decelerate by 1 (moving vehicles only —
///    speed is already floored at 0);
/// 5. move to `position + speed` (mod L).  If that cell is occupied — which
///    can happen only through a same-tick ordering race against a vehicle
///    that already moved — drop speed to 0 and stay put.  That fallback is
///    part of the model, not an error.
pub(crate) fn step_vehicle(
    id: VehicleId,
    vehicles: &mut VehicleStore,
    grid: &mut RingGrid,
    slowdown_probability: f64,
    rng: &mut SimRng,
) -> bool {
    let i = id.index();

    // ① Accelerate.
    if vehicles.speed[i] < vehicles.max_speed[i] {
        vehicles.speed[i] += 1;
    }

    // ②③ Decelerate for the gap.
    let gap = gap_ahead(grid, vehicles.position[i], vehicles.profile[i].gap_offset());
    if vehicles.speed[i] > gap {
        vehicles.speed[i] = gap;
    }

    // ④ Stochastic slowdown.
    if vehicles.speed[i] > 0 && rng.gen_bool(slowdown_probability) {
        vehicles.speed[i] -= 1;
    }

    // ⑤ Move.
    if vehicles.speed[i] == 0 {
        return false;
    }
    let from   = vehicles.position[i];
    let target = grid.wrap(from + vehicles.speed[i]);
    match grid.relocate(id, from, target) {
        Ok(()) => {
            vehicles.position[i] = target;
            true
        }
        Err(_) => {
            // Same-tick ordering race: another vehicle moved onto the target
            // cell earlier this step.  Collision-avoidance fallback.
            vehicles.speed[i] = 0;
            false
        }
    }
}
