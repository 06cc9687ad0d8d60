use serde::{Deserialize, Serialize};

use crate::config::Validate;
use crate::session_rng::SessionRng;
use crate::types::{BotType, Difficulty, FirstPlayerMode, Mark};

/// Configuration of a human-versus-bot game. The mark assignment doubles
/// as the order choice: X always opens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameSettings {
    pub human_mark: Mark,
    pub bot_mark: Mark,
    pub bot_type: BotType,
    pub max_depth: u32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
            bot_mark: Mark::O,
            bot_type: BotType::Minimax,
            max_depth: Difficulty::Hard.max_depth(),
        }
    }
}

impl GameSettings {
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            max_depth: difficulty.max_depth(),
            ..Self::default()
        }
    }

    pub fn with_first_player(
        first_player: FirstPlayerMode,
        bot_type: BotType,
        max_depth: u32,
        rng: &mut SessionRng,
    ) -> Self {
        let human_first = match first_player {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Bot => false,
            FirstPlayerMode::Random => rng.random_bool(),
        };

        let (human_mark, bot_mark) = if human_first {
            (Mark::X, Mark::O)
        } else {
            (Mark::O, Mark::X)
        };

        Self {
            human_mark,
            bot_mark,
            bot_type,
            max_depth,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty || self.bot_mark == Mark::Empty {
            return Err("Both sides must be assigned a mark".to_string());
        }
        if self.human_mark == self.bot_mark {
            return Err("Human and bot cannot share the same mark".to_string());
        }
        if self.max_depth == 0 {
            return Err("Search depth limit must be at least 1".to_string());
        }
        Ok(())
    }
}
