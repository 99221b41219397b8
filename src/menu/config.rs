//! Game configuration types.
//!
//! A [`GameConfig`] holds everything needed to start a game: who plays each
//! side, how strong the AI is, and how reproducible the run should be.

use crate::agent::ai::Difficulty;
use crate::game_repr::Side;

/// Configuration for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConfig {
    /// Human player typing moves at the terminal
    Human,
    /// AI player with specified difficulty
    AI { difficulty: Difficulty },
}

/// Game mode selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs Player - two humans
    PvP,
    /// Player vs AI - one human, one AI
    PvAI,
    /// AI vs AI - two AIs (for watching/testing)
    AIvAI,
}

/// Complete game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// The selected game mode
    pub mode: GameMode,
    /// Configuration for the Red player (moves first)
    pub red_player: PlayerConfig,
    /// Configuration for the Black player
    pub black_player: PlayerConfig,
    /// Seed for the AI random sources; `None` draws from system entropy
    pub seed: Option<u64>,
    /// Declare a draw after this many turns
    pub max_plies: Option<u32>,
}

impl GameConfig {
    /// Create a PvP game configuration.
    pub fn pvp() -> Self {
        Self {
            mode: GameMode::PvP,
            red_player: PlayerConfig::Human,
            black_player: PlayerConfig::Human,
            seed: None,
            max_plies: None,
        }
    }

    /// Create a PvAI game configuration.
    ///
    /// # Arguments
    /// * `human_side` - The side the human player will play
    /// * `ai_difficulty` - The difficulty level for the AI opponent
    pub fn pvai(human_side: Side, ai_difficulty: Difficulty) -> Self {
        let ai = PlayerConfig::AI {
            difficulty: ai_difficulty,
        };
        let (red_player, black_player) = match human_side {
            Side::Red => (PlayerConfig::Human, ai),
            Side::Black => (ai, PlayerConfig::Human),
        };

        Self {
            mode: GameMode::PvAI,
            red_player,
            black_player,
            seed: None,
            max_plies: None,
        }
    }

    /// Create an AIvAI game configuration.
    pub fn aivai(red_difficulty: Difficulty, black_difficulty: Difficulty) -> Self {
        Self {
            mode: GameMode::AIvAI,
            red_player: PlayerConfig::AI {
                difficulty: red_difficulty,
            },
            black_player: PlayerConfig::AI {
                difficulty: black_difficulty,
            },
            seed: None,
            max_plies: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = Some(max_plies);
        self
    }

    pub fn player(&self, side: Side) -> PlayerConfig {
        match side {
            Side::Red => self.red_player,
            Side::Black => self.black_player,
        }
    }

    /// Seed for the AI playing `side`, distinct per side so two AIs with the
    /// same difficulty do not mirror each other's draws.
    pub fn seed_for(&self, side: Side) -> Option<u64> {
        self.seed.map(|seed| match side {
            Side::Red => seed,
            Side::Black => seed.wrapping_add(1),
        })
    }

    /// Get the human player's side in a PvAI game.
    /// Returns None for PvP or AIvAI games.
    pub fn human_side(&self) -> Option<Side> {
        match self.mode {
            GameMode::PvAI => {
                if matches!(self.red_player, PlayerConfig::Human) {
                    Some(Side::Red)
                } else {
                    Some(Side::Black)
                }
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pvp_config() {
        let config = GameConfig::pvp();
        assert_eq!(config.mode, GameMode::PvP);
        assert_eq!(config.red_player, PlayerConfig::Human);
        assert_eq!(config.black_player, PlayerConfig::Human);
        assert_eq!(config.human_side(), None);
    }

    #[test]
    fn test_pvai_config_red() {
        let config = GameConfig::pvai(Side::Red, Difficulty::Hard);
        assert_eq!(config.mode, GameMode::PvAI);
        assert_eq!(config.red_player, PlayerConfig::Human);
        assert_eq!(
            config.black_player,
            PlayerConfig::AI {
                difficulty: Difficulty::Hard
            }
        );
        assert_eq!(config.human_side(), Some(Side::Red));
    }

    #[test]
    fn test_pvai_config_black() {
        let config = GameConfig::pvai(Side::Black, Difficulty::Easy);
        assert_eq!(
            config.player(Side::Red),
            PlayerConfig::AI {
                difficulty: Difficulty::Easy
            }
        );
        assert_eq!(config.player(Side::Black), PlayerConfig::Human);
        assert_eq!(config.human_side(), Some(Side::Black));
    }

    #[test]
    fn test_aivai_config() {
        let config = GameConfig::aivai(Difficulty::Medium, Difficulty::Hard);
        assert_eq!(config.mode, GameMode::AIvAI);
        assert_eq!(config.human_side(), None);
    }

    #[test]
    fn test_seed_and_ply_cap() {
        let config = GameConfig::aivai(Difficulty::Easy, Difficulty::Easy)
            .with_seed(10)
            .with_max_plies(200);
        assert_eq!(config.seed_for(Side::Red), Some(10));
        assert_eq!(config.seed_for(Side::Black), Some(11));
        assert_eq!(config.max_plies, Some(200));
        assert_eq!(GameConfig::pvp().seed_for(Side::Red), None);
    }
}
