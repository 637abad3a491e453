use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
pub mod savefile;
mod types;

/// Edge length of the (always square) board.
pub const GRID_SIZE: Coord = 9;
/// Total number of cells on the board.
pub const TOTAL_CELLS: CellCount = (GRID_SIZE as CellCount) * (GRID_SIZE as CellCount);
/// Mines placed by a fresh layout.
pub const MINE_COUNT: CellCount = 10;
/// Safe cells that must all be revealed to win.
pub const SAFE_CELL_COUNT: CellCount = TOTAL_CELLS - MINE_COUNT;
/// Upper bound on cells opened by the first-reveal flood fill.
pub const FLOOD_REVEAL_CAP: CellCount = 20;

pub(crate) const GRID_DIM: (usize, usize) = (GRID_SIZE as usize, GRID_SIZE as usize);

/// Mine positions for one game, independent of anything the player has seen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        if mine_mask.dim() != GRID_DIM {
            return Err(GameError::InvalidShape);
        }
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    /// Builds a layout from linear cell indices, `index = row * 9 + col`.
    pub fn from_cell_indices(indices: impl IntoIterator<Item = CellCount>) -> Result<Self> {
        let mut mine_mask = Array2::from_elem(GRID_DIM, false);
        for index in indices {
            if index >= TOTAL_CELLS {
                return Err(GameError::InvalidCoords);
            }
            let coords = (
                (index % GRID_SIZE as CellCount) as Coord,
                (index / GRID_SIZE as CellCount) as Coord,
            );
            mine_mask[coords.to_nd_index()] = true;
        }
        Self::from_mine_mask(mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        TOTAL_CELLS - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        NeighborIter::adjacent(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
