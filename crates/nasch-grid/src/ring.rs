//! `RingGrid` — fixed-length wraparound occupancy array.
//!
//! All positions handed to the grid are wrapped modulo the road length, so
//! callers may pass `position + speed` directly without pre-wrapping.
//! Occupancy mutation happens only through [`RingGrid::place`] and
//! [`RingGrid::relocate`], both of which refuse to overwrite an occupied
//! cell — the bijection between occupied cells and live vehicles can never
//! be broken from outside.

use nasch_core::VehicleId;

use crate::{GridError, GridResult};

/// A circular one-dimensional grid of cells, each holding at most one vehicle.
#[derive(Debug)]
pub struct RingGrid {
    cells: Vec<Option<VehicleId>>,
    /// Cached occupied-cell count for O(1) `occupied_count()`.
    occupied: usize,
}

impl RingGrid {
    /// Create an empty grid with `length` cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::ZeroLength`] for `length == 0` — a zero-cell
    /// torus has no valid positions.
    pub fn new(length: u32) -> GridResult<Self> {
        if length == 0 {
            return Err(GridError::ZeroLength);
        }
        Ok(Self {
            cells:    vec![None; length as usize],
            occupied: 0,
        })
    }

    /// Number of cells on the road.
    #[inline]
    pub fn len(&self) -> u32 {
        self.cells.len() as u32
    }

    /// `true` if the grid has no cells.  Never true for a constructed grid;
    /// provided for API completeness alongside `len`.
    pub fn is_empty_grid(&self) -> bool {
        self.cells.is_empty()
    }

    /// Wrap an arbitrary position onto the torus.
    #[inline]
    pub fn wrap(&self, pos: u32) -> u32 {
        pos % self.len()
    }

    /// `true` if the (wrapped) cell holds no vehicle.
    #[inline]
    pub fn is_empty(&self, pos: u32) -> bool {
        self.cells[self.wrap(pos) as usize].is_none()
    }

    /// The vehicle occupying the (wrapped) cell, if any.
    #[inline]
    pub fn occupant(&self, pos: u32) -> Option<VehicleId> {
        self.cells[self.wrap(pos) as usize]
    }

    /// Number of occupied cells.  Equals the live vehicle count at all times.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.occupied
    }

    /// Place `id` on the (wrapped) cell `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Occupied`] if the cell already holds a vehicle;
    /// the grid is unchanged.
    pub fn place(&mut self, id: VehicleId, pos: u32) -> GridResult<()> {
        let cell = self.wrap(pos);
        if let Some(occupant) = self.cells[cell as usize] {
            return Err(GridError::Occupied { cell, occupant });
        }
        self.cells[cell as usize] = Some(id);
        self.occupied += 1;
        Ok(())
    }

    /// Move `id` from `from` to `to`, vacating `from` atomically with
    /// occupying `to`.
    ///
    /// # Errors
    ///
    /// - [`GridError::NotOccupant`] if `from` does not hold `id`.
    /// - [`GridError::Occupied`] if `to` holds another vehicle.
    ///
    /// On error the grid is unchanged — a failed move never leaves the
    /// vehicle half-relocated.
    pub fn relocate(&mut self, id: VehicleId, from: u32, to: u32) -> GridResult<()> {
        let from = self.wrap(from);
        let to   = self.wrap(to);

        if self.cells[from as usize] != Some(id) {
            return Err(GridError::NotOccupant { cell: from, expected: id });
        }
        if to == from {
            return Ok(());
        }
        if let Some(occupant) = self.cells[to as usize] {
            return Err(GridError::Occupied { cell: to, occupant });
        }

        self.cells[from as usize] = None;
        self.cells[to as usize]   = Some(id);
        Ok(())
    }

    /// Iterator over `(cell, id)` for every occupied cell, ascending by cell.
    pub fn occupants(&self) -> impl Iterator<Item = (u32, VehicleId)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(cell, slot)| slot.map(|id| (cell as u32, id)))
    }

    /// Cells with no vehicle, ascending.  Used by drivers that inject
    /// vehicles at a random free cell mid-run.
    pub fn empty_cells(&self) -> Vec<u32> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .map(|(cell, _)| cell as u32)
            .collect()
    }
}
