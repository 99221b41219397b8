//! Player trait and associated types for checkers game agents.
//!
//! This module provides the core abstraction for entities that can provide moves.
//! Different player types (terminal human, minimax AI) implement the `Player` trait
//! to take part in games run by the [`Orchestrator`](crate::orchestrator::Orchestrator).
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. A human
//! player needs an input and an output stream, an AI player needs a difficulty
//! and a random source, so each implementation provides its own constructor.
//!
//! Players never own the board. The orchestrator hands them a read-only
//! [`Position`] and applies whatever move they return after checking it.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking: a human player waits for a line of input, an AI
//! player runs its search to completion. Turn-based play needs nothing more.

use crate::game_repr::{Move, Position, Side, Square};

/// Result of a completed checkers game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    /// Black ran out of moves or resigned
    RedWins,
    /// Red ran out of moves or resigned
    BlackWins,
    /// The ply cap was reached without a winner
    Draw,
}

impl GameResult {
    /// Create a GameResult from the winning side
    pub fn from_winner(winner: Side) -> Self {
        match winner {
            Side::Red => GameResult::RedWins,
            Side::Black => GameResult::BlackWins,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameResult::RedWins => Some(Side::Red),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Draw => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(side) => write!(f, "{} wins", side),
            None => f.write_str("Draw"),
        }
    }
}

/// Trait for entities that can provide checkers moves.
///
/// # Required Methods
///
/// Only `get_move()` must be implemented. All other methods have default
/// implementations that can be overridden as needed.
///
/// ## `get_move()`
/// - **Returns `None`**: the player resigns or its input is closed
/// - **Returns `Some(Move)`**: a move for `side`; the orchestrator rejects and
///   forfeits moves that are not legal
///
/// ## `continue_jump()`
/// - Called after a jump while the moved piece still has jumps available
/// - Default: stop the chain
pub trait Player {
    /// Request the next move from this player.
    ///
    /// ```rust,no_run
    /// use checkers_engine::agent::player::Player;
    /// use checkers_engine::game_repr::{Position, Side};
    ///
    /// fn play_turn(player: &mut dyn Player, position: &Position) {
    ///     match player.get_move(position, Side::Red) {
    ///         Some(mv) => println!("Player chose move: {}", mv),
    ///         None => println!("Player resigned!"),
    ///     }
    /// }
    /// ```
    fn get_move(&mut self, position: &Position, side: Side) -> Option<Move>;

    /// Offer another hop of a jump chain.
    ///
    /// `from` is where the jumping piece landed and `jumps` are its remaining jump
    /// destinations. Return one of them as a move from `from`, or `None` to stop.
    fn continue_jump(
        &mut self,
        _position: &Position,
        _side: Side,
        _from: Square,
        _jumps: &[Square],
    ) -> Option<Move> {
        None
    }

    /// Notify this player that the opponent made a move.
    fn opponent_moved(&mut self, _mv: Move) {
        // Default: do nothing
    }

    /// Notify this player that the game has ended.
    fn game_ended(&mut self, _result: GameResult) {
        // Default: do nothing
    }

    /// Get the display name of this player.
    fn name(&self) -> &str {
        "Player"
    }
}
