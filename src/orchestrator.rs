//! Game flow coordination.
//!
//! This module contains the [`Orchestrator`], which owns the live board and runs
//! the turn loop between two [`Player`]s:
//! - End detection before every turn (a side with no legal move loses)
//! - Move requests and legality checks
//! - Jump chains, one hop at a time, while the mover wants to continue
//! - Turn switching, last-move tracking and the optional ply cap
//!
//! # Example Flow
//!
//! ```text
//! [Check End] -> [Request Move] -> [Check + Apply] -> [Offer Next Hop]*
//!   -> [Notify Opponent] -> [Switch Turn] -> [Check End] ...
//! ```
//!
//! The orchestrator is the only code that mutates the live board. Players see
//! copies and the search works on its own copies.

use crate::agent::ai::MinimaxPlayer;
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Position, Side, Square};
use crate::menu::{GameConfig, PlayerConfig};

/// What a single call to [`Orchestrator::play_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A move (and possibly further hops) was applied. `touched` holds the squares
    /// of the last hop, `hops` the number of moves applied this turn.
    Moved { touched: [Square; 2], hops: usize },
    /// The game is over; no move was made.
    GameOver(GameResult),
}

/// Root component managing the game loop.
pub struct Orchestrator {
    /// The live board
    position: Position,

    /// Tuple represents (red_player, black_player)
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Whose turn it is
    current_turn: Side,

    /// Squares touched by the most recent hop, for highlighting
    last_move: Option<[Square; 2]>,

    /// Completed turns
    plies: u32,

    /// Turn count after which the game is drawn
    max_plies: Option<u32>,

    /// Result of the game if it has ended
    game_result: Option<GameResult>,
}

impl Orchestrator {
    /// Start a game from the standard position with Red to move.
    pub fn new(red: Box<dyn Player>, black: Box<dyn Player>) -> Self {
        Self {
            position: Position::starting(),
            players: (red, black),
            current_turn: Side::Red,
            last_move: None,
            plies: 0,
            max_plies: None,
            game_result: None,
        }
    }

    /// Build both players from `config`. AI players are created here; `human`
    /// supplies the player for every side configured as human.
    pub fn from_config<F>(config: &GameConfig, mut human: F) -> Self
    where
        F: FnMut(Side) -> Box<dyn Player>,
    {
        let mut create = |side: Side| -> Box<dyn Player> {
            match config.player(side) {
                PlayerConfig::Human => human(side),
                PlayerConfig::AI { difficulty } => {
                    let ai = match config.seed_for(side) {
                        Some(seed) => MinimaxPlayer::seeded(difficulty, seed),
                        None => MinimaxPlayer::with_difficulty(difficulty),
                    };
                    Box::new(ai)
                }
            }
        };
        let red = create(Side::Red);
        let black = create(Side::Black);

        log::info!(
            "New {:?} game: {} (Red) vs {} (Black)",
            config.mode,
            red.name(),
            black.name()
        );

        let mut orchestrator = Self::new(red, black);
        orchestrator.max_plies = config.max_plies;
        orchestrator
    }

    /// Replace the board and the side to move, e.g. to resume a position.
    pub fn with_position(mut self, position: Position, to_move: Side) -> Self {
        self.position = position;
        self.current_turn = to_move;
        self
    }

    pub fn with_max_plies(mut self, max_plies: Option<u32>) -> Self {
        self.max_plies = max_plies;
        self
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn current_turn(&self) -> Side {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<[Square; 2]> {
        self.last_move
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn game_result(&self) -> Option<GameResult> {
        self.game_result
    }

    fn player_mut(&mut self, side: Side) -> &mut dyn Player {
        match side {
            Side::Red => self.players.0.as_mut(),
            Side::Black => self.players.1.as_mut(),
        }
    }

    /// Detect the end of the game without changing any state.
    ///
    /// A side with neither steps nor jumps has lost; Red is checked first. The
    /// ply cap, when set, turns a still-running game into a draw.
    pub fn check_game_end(&self) -> Option<GameResult> {
        if !self.position.has_any_move(Side::Red) {
            return Some(GameResult::BlackWins);
        }
        if !self.position.has_any_move(Side::Black) {
            return Some(GameResult::RedWins);
        }
        match self.max_plies {
            Some(max) if self.plies >= max => Some(GameResult::Draw),
            _ => None,
        }
    }

    fn finish(&mut self, result: GameResult) -> TurnOutcome {
        log::info!("Game over after {} plies: {}", self.plies, result);
        self.game_result = Some(result);
        self.players.0.game_ended(result);
        self.players.1.game_ended(result);
        TurnOutcome::GameOver(result)
    }

    /// Play one turn for the side to move.
    ///
    /// A player that resigns, or returns a move that fails the legality check,
    /// loses the game. After a jump the mover is offered further hops of the same
    /// piece until it declines or none remain.
    pub fn play_turn(&mut self) -> TurnOutcome {
        if let Some(result) = self.game_result {
            return TurnOutcome::GameOver(result);
        }
        if let Some(result) = self.check_game_end() {
            return self.finish(result);
        }

        let side = self.current_turn;
        let snapshot = self.position;

        let Some(mv) = self.player_mut(side).get_move(&snapshot, side) else {
            log::info!("{} resigns", side);
            return self.finish(GameResult::from_winner(side.opposite()));
        };

        let mut touched = match self.position.apply_legal_move(mv, side) {
            Ok(touched) => touched,
            Err(err) => {
                log::warn!("{} forfeits with illegal move {}: {}", side, mv, err);
                return self.finish(GameResult::from_winner(side.opposite()));
            }
        };
        log::info!("{} plays {}", side, mv);
        self.player_mut(side.opposite()).opponent_moved(mv);

        let mut hops = 1;
        if mv.is_jump() {
            let mut at = mv.to;
            loop {
                // Re-query: a piece crowned by the last hop now jumps like a king
                let jumps = self.position.possible_moves(at).jumps;
                if jumps.is_empty() {
                    break;
                }

                let snapshot = self.position;
                let Some(next) = self.player_mut(side).continue_jump(&snapshot, side, at, &jumps)
                else {
                    break;
                };
                if next.from != at || !jumps.contains(&next.to) {
                    log::warn!("{} offered an invalid hop {}, ending the chain", side, next);
                    break;
                }

                touched = self.position.apply_move(next);
                log::info!("{} continues with {}", side, next);
                self.player_mut(side.opposite()).opponent_moved(next);
                hops += 1;
                at = next.to;
            }
        }

        self.last_move = Some(touched);
        self.plies += 1;
        self.current_turn = side.opposite();

        TurnOutcome::Moved { touched, hops }
    }

    /// Play turns until the game ends.
    pub fn run(&mut self) -> GameResult {
        loop {
            if let TurnOutcome::GameOver(result) = self.play_turn() {
                return result;
            }
        }
    }
}
