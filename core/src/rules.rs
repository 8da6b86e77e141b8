use core::fmt;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::*;

/// Every row, column and diagonal, in the order they are checked.
pub const LINES: [[CellIndex; 3]; 8] = [
    // rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed three-in-a-row.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub mark: Mark,
    pub cells: [CellIndex; 3],
}

/// Finds the first line of `LINES` held entirely by one mark.
pub fn winning_line(board: &Board) -> Option<Line> {
    LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells.map(|index| board[index]);
        match a.mark() {
            Some(mark) if a == b && b == c => Some(Line { mark, cells }),
            _ => None,
        }
    })
}

pub fn evaluate_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|line| line.mark)
}

/// A tie is a full board where nobody completed a line.
pub fn is_tie(board: &Board) -> bool {
    evaluate_winner(board).is_none() && board.is_full()
}

/// Where a game stands. Always derived from the board, never stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress { next: Mark },
    Won { mark: Mark },
    Tied,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won { .. } | Self::Tied)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Won { mark } => write!(f, "Winner: {mark}"),
            Self::Tied => write!(f, "It's a tie!"),
            Self::InProgress { next } => write!(f, "Next player: {next}"),
        }
    }
}

/// Derives the phase of `board`, with `next` being the mark due to move if the game is still open.
pub fn phase(board: &Board, next: Mark) -> Phase {
    let phase = if let Some(mark) = evaluate_winner(board) {
        Phase::Won { mark }
    } else if is_tie(board) {
        Phase::Tied
    } else {
        Phase::InProgress { next }
    };
    trace!("phase: {:?}", phase);
    phase
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn empty_board_has_no_winner_and_no_tie() {
        let board = Board::new();

        assert_eq!(evaluate_winner(&board), None);
        assert!(!is_tie(&board));
        assert_eq!(
            phase(&board, Mark::X),
            Phase::InProgress { next: Mark::X }
        );
    }

    #[test]
    fn every_line_wins_for_either_mark() {
        for mark in [Mark::X, Mark::O] {
            for line in LINES {
                let mut board = Board::new();
                for index in line {
                    board = board.with_cell(index, mark.into()).unwrap();
                }

                assert_eq!(evaluate_winner(&board), Some(mark), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(Line { mark, cells: line }));
                assert!(!is_tie(&board));
            }
        }
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        assert_eq!(evaluate_winner(&board("XX. OO. ...")), None);
        assert_eq!(evaluate_winner(&board("X.. .O. ..X")), None);
    }

    #[test]
    fn lines_are_checked_in_order() {
        // top row and left column both held by X, the row is reported
        let board = board("XXX X.O XOO");

        assert_eq!(
            winning_line(&board),
            Some(Line {
                mark: Mark::X,
                cells: [0, 1, 2]
            })
        );
    }

    #[test]
    fn full_board_without_line_is_tie() {
        let board = board("XOX XOO OXX");

        assert_eq!(evaluate_winner(&board), None);
        assert!(is_tie(&board));
        assert_eq!(phase(&board, Mark::O), Phase::Tied);
    }

    #[test]
    fn full_board_with_line_is_not_tie() {
        let board = board("XXX OOX OXO");

        assert!(board.is_full());
        assert!(!is_tie(&board));
        assert_eq!(phase(&board, Mark::O), Phase::Won { mark: Mark::X });
    }

    fn every_board() -> impl Iterator<Item = Board> {
        (0..3u32.pow(BOARD_CELLS as u32)).map(|mut code| {
            let mut board = Board::new();
            for index in 0..BOARD_CELLS as CellIndex {
                let cell = match code % 3 {
                    0 => Cell::Empty,
                    1 => Cell::X,
                    _ => Cell::O,
                };
                board = board.with_cell(index, cell).unwrap();
                code /= 3;
            }
            board
        })
    }

    fn holds_a_line(board: &Board, mark: Mark) -> bool {
        let cell = Cell::from(mark);
        let at = |row, col| board[cell_index(row, col)] == cell;
        let side = BOARD_SIDE;

        (0..side).any(|row| (0..side).all(|col| at(row, col)))
            || (0..side).any(|col| (0..side).all(|row| at(row, col)))
            || (0..side).all(|i| at(i, i))
            || (0..side).all(|i| at(i, side - 1 - i))
    }

    #[test]
    fn winner_and_tie_agree_with_brute_force_on_every_board() {
        let mut count = 0;
        for board in every_board() {
            let winner = evaluate_winner(&board);
            let x_line = holds_a_line(&board, Mark::X);
            let o_line = holds_a_line(&board, Mark::O);
            let full = (0..BOARD_CELLS as CellIndex).all(|index| !board[index].is_empty());

            match (x_line, o_line) {
                (false, false) => assert_eq!(winner, None, "{board}"),
                (true, false) => assert_eq!(winner, Some(Mark::X), "{board}"),
                (false, true) => assert_eq!(winner, Some(Mark::O), "{board}"),
                (true, true) => assert!(winner.is_some(), "{board}"),
            }
            assert_eq!(is_tie(&board), winner.is_none() && full, "{board}");
            assert_eq!(board.is_full(), full, "{board}");

            let expected = match (winner, full) {
                (Some(mark), _) => Phase::Won { mark },
                (None, true) => Phase::Tied,
                (None, false) => Phase::InProgress { next: Mark::O },
            };
            assert_eq!(phase(&board, Mark::O), expected, "{board}");
            count += 1;
        }
        assert_eq!(count, 19683);
    }

    #[test]
    fn status_strings() {
        assert_eq!(
            Phase::InProgress { next: Mark::O }.to_string(),
            "Next player: O"
        );
        assert_eq!(Phase::Won { mark: Mark::X }.to_string(), "Winner: X");
        assert_eq!(Phase::Tied.to_string(), "It's a tie!");
    }
}
