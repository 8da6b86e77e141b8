use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the board and whose turn it is. The only way to change either is [`GameEngine::play`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEngine {
    board: Board,
    x_is_next: bool,
}

impl GameEngine {
    pub const fn new() -> Self {
        Self {
            board: Board::new(),
            x_is_next: true,
        }
    }

    pub fn board(&self) -> Board {
        self.board
    }

    pub fn next_mark(&self) -> Mark {
        if self.x_is_next { Mark::X } else { Mark::O }
    }

    pub fn winner(&self) -> Option<Mark> {
        evaluate_winner(&self.board)
    }

    pub fn is_tie(&self) -> bool {
        is_tie(&self.board)
    }

    pub fn phase(&self) -> Phase {
        phase(&self.board, self.next_mark())
    }

    /// The status shown to the player; its `Display` is the verbatim status line.
    pub fn status(&self) -> Phase {
        self.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_engine(self)
    }

    /// Places the mark whose turn it is at `index`.
    ///
    /// Playing after someone has won or on an occupied cell is ignored and reported as
    /// [`MoveOutcome::NoChange`]. Only an index outside the board is an error. Either way a rejected move leaves the
    /// engine untouched.
    pub fn play(&mut self, index: CellIndex) -> Result<MoveOutcome> {
        let index = self.board.validate_index(index)?;

        if let Some(winner) = self.winner() {
            debug!("move at {} ignored, {} already won", index, winner);
            return Ok(MoveOutcome::NoChange);
        }

        if let Some(mark) = self.board[index].mark() {
            debug!("move at {} ignored, cell already holds {}", index, mark);
            return Ok(MoveOutcome::NoChange);
        }

        let mark = self.next_mark();
        self.board = self.board.with_cell(index, mark.into())?;
        self.x_is_next = !self.x_is_next;
        trace!("{} placed at {}", mark, index);

        Ok(match self.phase() {
            Phase::Won { mark } => MoveOutcome::Won(mark),
            Phase::Tied => MoveOutcome::Tied,
            Phase::InProgress { .. } => MoveOutcome::Placed,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
