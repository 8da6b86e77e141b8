use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only picture of a game handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub phase: Phase,
    pub status: String,
    pub winning_cells: Option<[CellIndex; 3]>,
}

impl Snapshot {
    pub fn from_engine(engine: &GameEngine) -> Self {
        Self::from_board(engine.board(), engine.next_mark())
    }

    pub fn from_board(board: Board, next: Mark) -> Self {
        let phase = phase(&board, next);
        Self {
            board,
            phase,
            status: phase.to_string(),
            winning_cells: winning_line(&board).map(|line| line.cells),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.phase.is_finished()
    }

    /// Whether a click on `index` could change the game.
    pub fn accepts_move_at(&self, index: CellIndex) -> bool {
        !self.is_finished() && self.board.cell(index).is_some_and(Cell::is_empty)
    }

    pub fn is_winning_cell(&self, index: CellIndex) -> bool {
        self.winning_cells
            .is_some_and(|cells| cells.contains(&index))
    }
}
