pub mod board;
pub mod bot_controller;
pub mod config;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod settings;
pub mod types;
pub mod win_detector;

pub use board::{
    BOARD_CELLS, Board, WIN_LINES, apply_move, empty_board, get_available_moves, is_board_full,
    is_valid_move, undo_move,
};
pub use bot_controller::{BotInput, SearchResult, calculate_minimax_move, calculate_move};
pub use config::{SettingsStore, Validate};
pub use game_state::GameState;
pub use session::GameSession;
pub use session_rng::SessionRng;
pub use settings::GameSettings;
pub use types::{BotType, Difficulty, FirstPlayerMode, GameStatus, Mark, WinningLine};
pub use win_detector::{check_win, check_win_with_line, check_winner, is_draw};
