use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EngineState {
    /// No successful reveal yet; the next reveal opens the starting region.
    Ready,
    Active,
    Won,
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for EngineState {
    fn default() -> Self {
        Self::Ready
    }
}

/// Represents a game from start to finish. Rejected moves are reported as
/// `NoChange` outcomes and leave the state untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Array2<Cell>,
    flags: Array2<bool>,
    revealed_count: CellCount,
    state: EngineState,
}

impl GameEngine {
    /// Fresh, fully hidden board: each cell's contents are baked from the
    /// layout, all flags cleared.
    pub fn new(layout: MineLayout) -> Self {
        let board = Array2::from_shape_fn(GRID_DIM, |(x, y)| {
            let coords = (x as Coord, y as Coord);
            let kind = if layout.contains_mine(coords) {
                CellKind::Mine
            } else {
                CellKind::Number(layout.adjacent_mine_count(coords))
            };
            Cell::hidden(kind)
        });
        Self {
            board,
            flags: Array2::from_elem(GRID_DIM, false),
            revealed_count: 0,
            state: EngineState::Ready,
        }
    }

    /// Reconstructs an engine from externally supplied grids, e.g. a parsed
    /// save file. Checks, first violation wins: both grids are 9x9, every
    /// cell code is legal, every stored neighbor count matches the mine
    /// positions (hidden and revealed mines both count), and no revealed
    /// cell is flagged. Game progress and outcome are then derived from the
    /// revealed cells alone.
    pub fn from_grids(codes: Array2<CellCode>, flags: Array2<bool>) -> Result<Self> {
        if codes.dim() != GRID_DIM || flags.dim() != GRID_DIM {
            return Err(GameError::InvalidShape);
        }

        let mut board = Array2::from_elem(GRID_DIM, Cell::hidden(CellKind::Number(0)));
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let coords = (x, y);
                board[coords.to_nd_index()] = Cell::from_code(codes[coords.to_nd_index()])?;
            }
        }

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let coords = (x, y);
                let CellKind::Number(count) = board[coords.to_nd_index()].kind else {
                    continue;
                };
                let mines = NeighborIter::adjacent(coords)
                    .filter(|&pos| board[pos.to_nd_index()].kind.is_mine())
                    .count() as u8;
                if count != mines {
                    return Err(GameError::AdjacencyMismatch);
                }
            }
        }

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let coords = (x, y);
                if board[coords.to_nd_index()].revealed && flags[coords.to_nd_index()] {
                    return Err(GameError::FlaggedRevealed);
                }
            }
        }

        let revealed_count = board.iter().filter(|cell| cell.revealed).count() as CellCount;
        let hit_mine = board
            .iter()
            .any(|cell| cell.revealed && cell.kind.is_mine());
        let state = if hit_mine {
            EngineState::Lost
        } else if revealed_count == SAFE_CELL_COUNT {
            EngineState::Won
        } else if revealed_count == 0 {
            EngineState::Ready
        } else {
            EngineState::Active
        };

        Ok(Self {
            board,
            flags,
            revealed_count,
            state,
        })
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.board[coords.to_nd_index()]
    }

    /// Raw signed encoding of a cell, as used by the save format.
    pub fn cell_code(&self, coords: Coord2) -> CellCode {
        self.cell_at(coords).code()
    }

    pub fn is_flagged(&self, coords: Coord2) -> bool {
        self.flags[coords.to_nd_index()]
    }

    pub fn revealed_cells(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flags.iter().filter(|&&flagged| flagged).count() as CellCount
    }

    /// How many mines have not been flagged yet; negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        MINE_COUNT as isize - self.flagged_count() as isize
    }

    /// Attempts to reveal a cell. Out-of-range coordinates, finished games,
    /// flagged cells and already revealed cells are all `NoChange`.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !in_bounds(coords) || self.state.is_finished() {
            return NoChange;
        }
        let index = coords.to_nd_index();
        if self.board[index].revealed || self.flags[index] {
            return NoChange;
        }

        if self.board[index].kind.is_mine() {
            self.board[index].revealed = true;
            self.revealed_count += 1;
            self.state = EngineState::Lost;
            log::debug!("mine hit at {:?}", coords);
            return HitMine;
        }

        if self.state.is_ready() {
            // the opening move discards every flag, not just those inside
            // the region about to be revealed
            self.flags.fill(false);
            self.flood_reveal(coords);
            self.state = EngineState::Active;
            log::debug!(
                "opening reveal at {:?}, {} cells revealed",
                coords,
                self.revealed_count
            );
            return Revealed;
        }

        self.board[index].revealed = true;
        self.revealed_count += 1;
        log::debug!("revealed {:?}, total {}", coords, self.revealed_count);
        if self.revealed_count == SAFE_CELL_COUNT {
            self.state = EngineState::Won;
            Won
        } else {
            Revealed
        }
    }

    /// Work-list walk performing the opening reveal: expands through hidden
    /// safe cells along the four orthogonal directions and stops once
    /// `FLOOD_REVEAL_CAP` cells are open. Mines, already revealed cells and
    /// the board edge bound the walk; numbered cells do not.
    fn flood_reveal(&mut self, start: Coord2) {
        let mut to_visit = vec![start];
        while let Some(coords) = to_visit.pop() {
            if self.revealed_count >= FLOOD_REVEAL_CAP {
                break;
            }
            let index = coords.to_nd_index();
            if self.board[index].revealed || self.board[index].kind.is_mine() {
                continue;
            }
            self.board[index].revealed = true;
            self.revealed_count += 1;
            log::trace!("flood opened {:?}", coords);
            to_visit.extend(NeighborIter::orthogonal(coords));
        }
    }

    /// Toggles a flag. Out-of-range coordinates, finished games and revealed
    /// cells are all `NoChange`, so a flag can never sit on a revealed cell.
    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        if !in_bounds(coords) || self.state.is_finished() {
            return MarkOutcome::NoChange;
        }
        let index = coords.to_nd_index();
        if self.board[index].revealed {
            return MarkOutcome::NoChange;
        }
        self.flags[index] = !self.flags[index];
        MarkOutcome::Changed
    }
}
