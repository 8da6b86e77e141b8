use thiserror::Error;

use crate::CellIndex;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell index {0} is outside the board")]
    InvalidIndex(CellIndex),
    #[error("Board needs exactly 9 cells, got {0}")]
    InvalidBoardShape(usize),
    #[error("Unknown board symbol {0:?}")]
    InvalidSymbol(char),
}

pub type Result<T> = core::result::Result<T, GameError>;
