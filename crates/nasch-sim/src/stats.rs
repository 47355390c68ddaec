//! Aggregate statistics over the vehicle population.

use nasch_agent::VehicleStore;

use crate::{SimError, SimResult};

/// Mean of all live vehicles' current speeds, in cells per tick.
///
/// # Errors
///
/// [`SimError::EmptyPopulation`] for a zero-vehicle store.  Callers that
/// want a silent default must guard explicitly; the mean of nothing is not a
/// number.
pub fn mean_speed(vehicles: &VehicleStore) -> SimResult<f64> {
    if vehicles.is_empty() {
        return Err(SimError::EmptyPopulation);
    }
    let total: u64 = vehicles.speed.iter().map(|&s| s as u64).sum();
    Ok(total as f64 / vehicles.count as f64)
}

/// Number of vehicles currently at a standstill.
pub fn halted_count(vehicles: &VehicleStore) -> usize {
    vehicles.speed.iter().filter(|&&s| s == 0).count()
}
