use crate::bot_controller::{BotInput, calculate_move};
use crate::config::Validate;
use crate::game_state::GameState;
use crate::log;
use crate::session_rng::SessionRng;
use crate::settings::GameSettings;
use crate::types::{GameStatus, Mark, WinningLine};
use crate::win_detector::check_win_with_line;

/// One human-versus-bot game. The caller drives the turn loop: it feeds
/// human input through `play_human_move`, asks for `play_bot_move` when
/// `is_bot_turn` says so, and reads the state back for rendering. Pacing
/// and input debouncing are the caller's concern; every call here is
/// synchronous and returns only when the move is fully applied.
pub struct GameSession {
    state: GameState,
    settings: GameSettings,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(settings: GameSettings) -> Result<Self, String> {
        Self::with_rng(settings, SessionRng::from_random())
    }

    /// Seeded variant for deterministic replays of random-bot games.
    pub fn with_rng(settings: GameSettings, rng: SessionRng) -> Result<Self, String> {
        settings.validate()?;
        Ok(Self {
            state: GameState::new(),
            settings,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn is_over(&self) -> bool {
        self.state.status != GameStatus::InProgress
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.is_over() && self.state.current_mark == self.settings.bot_mark
    }

    pub fn winner(&self) -> Option<Mark> {
        self.state.get_winner()
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.state.board)
    }

    pub fn play_human_move(&mut self, cell: usize) -> Result<(), String> {
        if self.state.current_mark != self.settings.human_mark {
            return Err("Not the human's turn".to_string());
        }

        self.state.place_mark(self.settings.human_mark, cell)?;
        log!(
            "Human ({}) marked cell {}",
            self.settings.human_mark.symbol(),
            cell
        );
        self.log_game_over();
        Ok(())
    }

    pub fn play_bot_move(&mut self) -> Result<usize, String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }
        if !self.is_bot_turn() {
            return Err("Not the bot's turn".to_string());
        }

        let input = BotInput {
            board: self.state.board,
            human_mark: self.settings.human_mark,
            bot_mark: self.settings.bot_mark,
            max_depth: self.settings.max_depth,
        };

        let cell = calculate_move(self.settings.bot_type, &input, &mut self.rng)
            .ok_or_else(|| "Bot has no available move".to_string())?;

        self.state.place_mark(self.settings.bot_mark, cell)?;
        log!(
            "Bot ({}) marked cell {}",
            self.settings.bot_mark.symbol(),
            cell
        );
        self.log_game_over();
        Ok(cell)
    }

    pub fn reset(&mut self) {
        self.state = GameState::new();
        log!("Game restarted");
    }

    fn log_game_over(&self) {
        match self.state.get_winner() {
            Some(winner) => log!("Game over: {} won", winner.symbol()),
            None if self.state.status == GameStatus::Draw => log!("Game over: draw"),
            None => {}
        }
    }
}
