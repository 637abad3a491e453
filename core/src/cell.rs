use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Signed integer encoding used by the save format: the magnitude carries the
/// cell contents, the sign carries hidden (negative) vs. revealed (positive).
pub type CellCode = i16;

/// Magnitude reserved for mines; numbered cells use `count + 1` (1..=9).
pub const MINE_MAGNITUDE: u16 = 999;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    Mine,
    /// Safe cell labelled with its adjacent mine count (0..=8).
    Number(u8),
}

impl CellKind {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub kind: CellKind,
    pub revealed: bool,
}

impl Cell {
    pub const fn hidden(kind: CellKind) -> Self {
        Self {
            kind,
            revealed: false,
        }
    }

    pub fn code(self) -> CellCode {
        let magnitude = match self.kind {
            CellKind::Mine => MINE_MAGNITUDE as CellCode,
            CellKind::Number(count) => CellCode::from(count) + 1,
        };
        if self.revealed { magnitude } else { -magnitude }
    }

    /// Parses the signed encoding; zero and out-of-range magnitudes are illegal.
    pub fn from_code(code: CellCode) -> Result<Self> {
        let kind = match code.unsigned_abs() {
            MINE_MAGNITUDE => CellKind::Mine,
            magnitude @ 1..=9 => CellKind::Number((magnitude - 1) as u8),
            _ => return Err(GameError::IllegalCellCode(code)),
        };
        Ok(Self {
            kind,
            revealed: code > 0,
        })
    }
}
