//! Fluent builder for constructing a `VehicleStore` from vehicle classes.
//!
//! # Usage
//!
//! ```rust
//! use nasch_agent::{DriverProfile, VehicleStoreBuilder};
//!
//! let store = VehicleStoreBuilder::new()
//!     .with_class(8, 5, DriverProfile::Normal)
//!     .with_class(2, 2, DriverProfile::Cautious)
//!     .build();
//!
//! assert_eq!(store.count, 10);
//! ```
//!
//! All vehicles start at `speed = 0` with an unplaced position; the sim
//! builder assigns cells and registers each vehicle on the grid.

use crate::{DriverProfile, VehicleStore};

/// One homogeneous group of vehicles sharing a ceiling and profile.
#[derive(Copy, Clone, Debug)]
struct VehicleClass {
    count:     u32,
    max_speed: u32,
    profile:   DriverProfile,
}

/// Fluent builder for [`VehicleStore`].
#[derive(Default)]
pub struct VehicleStoreBuilder {
    classes: Vec<VehicleClass>,
}

impl VehicleStoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` vehicles with the given speed ceiling and profile.
    ///
    /// Classes are laid out in call order, so ids 0..n go to the first class,
    /// the next ids to the second, and so on.
    pub fn with_class(mut self, count: u32, max_speed: u32, profile: DriverProfile) -> Self {
        self.classes.push(VehicleClass { count, max_speed, profile });
        self
    }

    /// Construct the store.  Empty classes contribute nothing.
    pub fn build(self) -> VehicleStore {
        let total: u32 = self.classes.iter().map(|c| c.count).sum();
        let mut store = VehicleStore {
            count:     0,
            speed:     Vec::with_capacity(total as usize),
            max_speed: Vec::with_capacity(total as usize),
            position:  Vec::with_capacity(total as usize),
            profile:   Vec::with_capacity(total as usize),
        };
        for class in self.classes {
            for _ in 0..class.count {
                store.push_vehicle(class.max_speed, class.profile);
            }
        }
        store
    }
}
