use crate::types::Mark;

pub const BOARD_CELLS: usize = 9;

/// The 8 winning triples of the 3x3 grid: rows, columns, diagonals.
/// Cells are indexed 0..=8 in row-major order.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

/// Empty cells in ascending index order. The minimax search relies on
/// this ordering for its deterministic tie-break.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &mark)| mark == Mark::Empty)
        .map(|(cell, _)| cell)
        .collect()
}

pub fn is_valid_move(board: &Board, cell: usize) -> bool {
    cell < BOARD_CELLS && board[cell] == Mark::Empty
}

/// Caller checks legality first; the search only iterates available cells.
pub fn apply_move(board: &mut Board, cell: usize, mark: Mark) {
    board[cell] = mark;
}

pub fn undo_move(board: &mut Board, cell: usize) {
    board[cell] = Mark::Empty;
}

pub fn is_board_full(board: &Board) -> bool {
    board.iter().all(|&mark| mark != Mark::Empty)
}
