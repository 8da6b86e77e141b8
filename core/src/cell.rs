use serde::{Deserialize, Serialize};

use crate::Mark;

/// Content of a single board cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn mark(self) -> Option<Mark> {
        match self {
            Self::Empty => None,
            Self::X => Some(Mark::X),
            Self::O => Some(Mark::O),
        }
    }

    /// Symbol used by the text notation of a board, `.` for an empty cell.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::X => 'X',
            Self::O => 'O',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' | '_' | '-' => Some(Self::Empty),
            'X' | 'x' => Some(Self::X),
            'O' | 'o' => Some(Self::O),
            _ => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Self::X,
            Mark::O => Self::O,
        }
    }
}
