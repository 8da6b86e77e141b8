use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 3x3 grid, stored row-major.
///
/// A board is a plain value: every change produces a new board, so anything holding an older copy keeps seeing a
/// complete, consistent grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    pub const fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if is_valid_index(index) {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex(index))
        }
    }

    pub fn cell(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get(usize::from(index)).copied()
    }

    /// Returns a copy of this board with `cell` written at `index`.
    pub fn with_cell(&self, index: CellIndex, cell: Cell) -> Result<Self> {
        let index = self.validate_index(index)?;
        let mut next = *self;
        next.cells[usize::from(index)] = cell;
        Ok(next)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(usize::from(BOARD_SIDE))
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[usize::from(index)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.symbol())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    /// Parses the notation printed by `Display`: nine cells out of `X`, `O` and `.`, whitespace ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [Cell::Empty; BOARD_CELLS];
        let mut len = 0;

        for symbol in s.chars().filter(|c| !c.is_whitespace()) {
            let cell = Cell::from_symbol(symbol).ok_or(GameError::InvalidSymbol(symbol))?;
            if len < BOARD_CELLS {
                cells[len] = cell;
            }
            len += 1;
        }

        if len != BOARD_CELLS {
            return Err(GameError::InvalidBoardShape(len));
        }

        Ok(Self { cells })
    }
}
