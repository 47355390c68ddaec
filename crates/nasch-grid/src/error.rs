use nasch_core::VehicleId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid length must be at least 1")]
    ZeroLength,

    #[error("cell {cell} is already occupied by {occupant}")]
    Occupied { cell: u32, occupant: VehicleId },

    #[error("cell {cell} is not occupied by {expected}")]
    NotOccupant { cell: u32, expected: VehicleId },
}

pub type GridResult<T> = Result<T, GridError>;
