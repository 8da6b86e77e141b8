/// Position of a cell on the board, counted row-major from the top-left corner.
pub type CellIndex = u8;

/// Side length of the square board.
pub const BOARD_SIDE: u8 = 3;

/// Total number of cells on the board.
pub const BOARD_CELLS: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

pub const fn cell_index(row: u8, col: u8) -> CellIndex {
    row * BOARD_SIDE + col
}

pub const fn is_valid_index(index: CellIndex) -> bool {
    (index as usize) < BOARD_CELLS
}
