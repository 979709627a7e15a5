use thiserror::Error;

use crate::grids::{Dimensions, Position};

#[derive(Debug, Error, PartialEq)]
pub enum MazeError {
    #[error("invalid maze configuration: {0}")]
    Config(String),

    #[error("position {pos} is outside the {dims} grid")]
    OutOfBounds { pos: Position, dims: Dimensions },

    #[error("cells {0} and {1} are not adjacent")]
    NotAdjacent(Position, Position),

    #[error("generation precondition violated: {0}")]
    Precondition(&'static str),
}

pub type Result<T> = std::result::Result<T, MazeError>;
