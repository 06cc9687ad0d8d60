use crate::board::{Board, WIN_LINES, is_board_full};
use crate::types::{Mark, WinningLine};

/// True iff one of the 8 winning triples is uniformly `mark`.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&cell| board[cell] == mark))
}

pub fn check_winner(board: &Board) -> Option<Mark> {
    for line in &WIN_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some(mark);
        }
    }
    None
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for line in &WIN_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some(WinningLine::new(mark, *line));
        }
    }
    None
}

pub fn is_draw(board: &Board) -> bool {
    is_board_full(board) && check_winner(board).is_none()
}
