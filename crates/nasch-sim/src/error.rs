use nasch_core::CoreError;
use nasch_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("explicit positions length {got} does not match vehicle count {expected}")]
    PositionCount { expected: usize, got: usize },

    #[error("a fleet carries its own positions; explicit positions cannot be combined with it")]
    FleetWithPositions,

    #[error("average speed is undefined for an empty population")]
    EmptyPopulation,
}

pub type SimResult<T> = Result<T, SimError>;
