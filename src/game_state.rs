use crate::board::{BOARD_CELLS, Board, empty_board};
use crate::types::{GameStatus, Mark};
use crate::win_detector::check_winner;

/// State of one game in progress. X always opens; the session layer
/// decides which side holds which mark.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    /// Turns left before the board is full; hitting 0 without a winner
    /// ends the game as a draw.
    pub turn_count: u32,
    pub last_move: Option<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            turn_count: BOARD_CELLS as u32,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, mark: Mark, cell: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {}'s turn", mark.symbol()));
        }

        if cell >= BOARD_CELLS {
            return Err(format!("Cell {} is out of bounds", cell));
        }

        if self.board[cell] != Mark::Empty {
            return Err(format!("Cell {} is already marked", cell));
        }

        self.board[cell] = mark;
        self.last_move = Some(cell);
        self.turn_count -= 1;

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        self.current_mark = match self.current_mark {
            Mark::X => Mark::O,
            _ => Mark::X,
        };
    }

    fn check_game_over(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            self.status = match winner {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.turn_count == 0 {
            self.status = GameStatus::Draw;
        }
    }

    pub fn get_winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_with_x() {
        let state = GameState::new();
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.turn_count, 9);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = GameState::new();
        state.place_mark(Mark::X, 4).unwrap();
        assert_eq!(state.current_mark, Mark::O);
        assert_eq!(state.last_move, Some(4));
        assert_eq!(state.turn_count, 8);
    }

    #[test]
    fn test_place_mark_rejects_wrong_turn() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::O, 0).is_err());
    }

    #[test]
    fn test_place_mark_rejects_occupied_cell() {
        let mut state = GameState::new();
        state.place_mark(Mark::X, 0).unwrap();
        assert!(state.place_mark(Mark::O, 0).is_err());
    }

    #[test]
    fn test_place_mark_rejects_out_of_bounds() {
        let mut state = GameState::new();
        assert!(state.place_mark(Mark::X, 9).is_err());
    }

    #[test]
    fn test_win_ends_game_and_keeps_turn() {
        let mut state = GameState::new();
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 2),
        ] {
            state.place_mark(mark, cell).unwrap();
        }
        assert_eq!(state.status, GameStatus::XWon);
        assert_eq!(state.get_winner(), Some(Mark::X));
        assert_eq!(state.current_mark, Mark::X);
        assert!(state.place_mark(Mark::O, 5).is_err());
    }

    #[test]
    fn test_o_win_attributed_to_o() {
        let mut state = GameState::new();
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 3),
            (Mark::X, 1),
            (Mark::O, 4),
            (Mark::X, 8),
            (Mark::O, 5),
        ] {
            state.place_mark(mark, cell).unwrap();
        }
        assert_eq!(state.status, GameStatus::OWon);
        assert_eq!(state.get_winner(), Some(Mark::O));
    }

    #[test]
    fn test_full_board_without_winner_is_draw() {
        let mut state = GameState::new();
        // X O X / X O O / O X X, played in an order that never completes
        // a triple early.
        for (mark, cell) in [
            (Mark::X, 0),
            (Mark::O, 1),
            (Mark::X, 2),
            (Mark::O, 4),
            (Mark::X, 3),
            (Mark::O, 5),
            (Mark::X, 7),
            (Mark::O, 6),
            (Mark::X, 8),
        ] {
            state.place_mark(mark, cell).unwrap();
        }
        assert_eq!(state.status, GameStatus::Draw);
        assert_eq!(state.get_winner(), None);
        assert_eq!(state.turn_count, 0);
    }
}
