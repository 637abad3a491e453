use thiserror::Error;

use crate::CellCode;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape does not match the 9x9 grid")]
    InvalidShape,
    #[error("Cell value {0} is not a valid encoding")]
    IllegalCellCode(CellCode),
    #[error("Stored neighbor count disagrees with the mine positions")]
    AdjacencyMismatch,
    #[error("Revealed cells must not be flagged")]
    FlaggedRevealed,
}

pub type Result<T> = core::result::Result<T, GameError>;
