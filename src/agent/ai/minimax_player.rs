//! MinimaxPlayer - checkers AI using minimax with alpha-beta pruning
//!
//! This module holds the difficulty policy and the AI player built on top of
//! [`search`](super::search). Strength is tuned with two independent knobs:
//! - **Search depth**: how many plies the AI looks ahead
//! - **Epsilon**: probability, checked at every search node, of abandoning the
//!   reasoned move for a random one
//!
//! # Difficulty Levels
//!
//! - **Easy**: depth 2, epsilon 0.2
//! - **Medium**: depth 4, epsilon 0.1
//! - **Hard**: depth 6, epsilon 0.05
//!
//! # Examples
//!
//! ```ignore
//! use checkers_engine::agent::ai::{Difficulty, MinimaxPlayer};
//!
//! let ai = MinimaxPlayer::seeded(Difficulty::Hard, 42);
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::search::{search, search_among};
use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Move, Position, Side, Square};

/// AI difficulty levels that map to search depth and move randomness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Depth 2, epsilon 0.2
    Easy,
    /// Depth 4, epsilon 0.1
    #[default]
    Medium,
    /// Depth 6, epsilon 0.05
    Hard,
}

impl Difficulty {
    /// All levels, weakest first
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// Number of plies searched before falling back to static evaluation
    pub fn max_depth(&self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
        }
    }

    /// Probability of a random move override at each search node
    pub fn epsilon(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.2,
            Difficulty::Medium => 0.1,
            Difficulty::Hard => 0.05,
        }
    }

    /// `(epsilon, depth)` pair used to parameterize one search
    pub fn settings(&self) -> (f64, u8) {
        (self.epsilon(), self.max_depth())
    }

    /// Get a display name for this difficulty level
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Exact, case-sensitive lookup ("Easy", "Medium", "Hard")
    pub fn parse(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|level| level.name() == name)
    }

    /// Look a level up by name. Unknown names, including other spellings such as
    /// "easy", fall back to Medium.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Let the computer play Black on `board` at the named level.
///
/// Applies the chosen move and returns the touched squares `[from, to]`, or
/// `None` when Black has no legal move.
pub fn ai_make_move<R: Rng + ?Sized>(
    board: &mut Position,
    level: &str,
    rng: &mut R,
) -> Option<[Square; 2]> {
    let difficulty = Difficulty::from_name(level);
    let (epsilon, depth) = difficulty.settings();

    let result = search(board, Side::Black, depth, epsilon, rng);
    match result.best_move {
        Some(mv) => Some(board.apply_move(mv)),
        None => {
            log::warn!("AI ({}) found no move for Black", difficulty);
            None
        }
    }
}

/// AI player that uses minimax with alpha-beta pruning and epsilon noise
///
/// The search is stateless across turns: every call to `get_move` starts a new
/// tree from the given position. The player owns its random source, so a seeded
/// player replays the same game against the same opponent.
pub struct MinimaxPlayer {
    /// AI difficulty level determining search depth and epsilon
    difficulty: Difficulty,

    /// Display name for this AI player
    name: String,

    /// Source for shuffling and epsilon draws
    rng: StdRng,
}

impl MinimaxPlayer {
    /// Create a new MinimaxPlayer with custom difficulty, name and random source
    pub fn new(difficulty: Difficulty, name: String, rng: StdRng) -> Self {
        Self {
            difficulty,
            name,
            rng,
        }
    }

    /// Create a player named "AI ({difficulty})" seeded from system entropy
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name, StdRng::from_entropy())
    }

    /// Create a reproducible player
    pub fn seeded(difficulty: Difficulty, seed: u64) -> Self {
        let name = format!("AI ({})", difficulty.name());
        Self::new(difficulty, name, StdRng::seed_from_u64(seed))
    }

    /// Get the current difficulty level
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Set a new difficulty level, renaming the player if the name was generated
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
        if self.name.starts_with("AI (") {
            self.name = format!("AI ({})", difficulty.name());
        }
    }
}

impl Player for MinimaxPlayer {
    fn get_move(&mut self, position: &Position, side: Side) -> Option<Move> {
        let (epsilon, depth) = self.difficulty.settings();
        let result = search(position, side, depth, epsilon, &mut self.rng);

        log::debug!(
            "[{}] score {} after {} nodes",
            self.name,
            result.score,
            result.nodes_searched
        );

        result.best_move
    }

    /// The AI always takes another hop when one is offered, picking the hop the
    /// search likes best.
    fn continue_jump(
        &mut self,
        position: &Position,
        side: Side,
        from: Square,
        jumps: &[Square],
    ) -> Option<Move> {
        let candidates: Vec<Move> = jumps.iter().map(|&to| Move::new(from, to)).collect();
        let (epsilon, depth) = self.difficulty.settings();
        search_among(position, &candidates, side, depth, epsilon, &mut self.rng).best_move
    }

    fn game_ended(&mut self, result: GameResult) {
        log::debug!("[{}] game over: {}", self.name, result);
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Cell;

    #[test]
    fn test_difficulty_settings() {
        assert_eq!(Difficulty::Easy.settings(), (0.2, 2));
        assert_eq!(Difficulty::Medium.settings(), (0.1, 4));
        assert_eq!(Difficulty::Hard.settings(), (0.05, 6));
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Easy.name(), "Easy");
        assert_eq!(Difficulty::Medium.name(), "Medium");
        assert_eq!(Difficulty::Hard.name(), "Hard");
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Difficulty::from_name("Easy"), Difficulty::Easy);
        assert_eq!(Difficulty::from_name("Medium"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name("Hard"), Difficulty::Hard);
    }

    #[test]
    fn test_unknown_name_falls_back_to_medium() {
        assert_eq!(Difficulty::from_name("Impossible"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(""), Difficulty::Medium);
        // Names are matched exactly
        assert_eq!(Difficulty::from_name("easy"), Difficulty::Medium);
        assert_eq!(Difficulty::from_name(" Hard"), Difficulty::Medium);
        assert_eq!(Difficulty::parse("hard"), None);
        assert_eq!(Difficulty::parse("Hard"), Some(Difficulty::Hard));
    }

    #[test]
    fn test_ai_make_move_applies_a_black_move() {
        let mut board = Position::starting();
        let mut rng = StdRng::seed_from_u64(11);

        let touched = ai_make_move(&mut board, "Easy", &mut rng).expect("black can move");

        let [from, to] = touched;
        assert!(board.cell_at(from).is_empty());
        assert!(board.cell_at(to).belongs_to(Side::Black));
        assert_eq!(board.count(Cell::BlackMan), 12);
    }

    #[test]
    fn test_ai_make_move_without_moves() {
        let mut board = Position::empty();
        board.set_cell(Square::new(7, 0), Cell::RedMan);
        let before = board;

        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(ai_make_move(&mut board, "Hard", &mut rng), None);
        assert_eq!(board, before);
    }

    #[test]
    fn test_set_difficulty_updates_name() {
        let mut ai = MinimaxPlayer::seeded(Difficulty::Easy, 1);
        assert_eq!(ai.name(), "AI (Easy)");
        ai.set_difficulty(Difficulty::Hard);
        assert_eq!(ai.name(), "AI (Hard)");
        assert_eq!(ai.difficulty(), Difficulty::Hard);
    }

    #[test]
    fn test_ai_continues_jump_chain() {
        let mut pos = Position::empty();
        pos.set_cell(Square::new(7, 4), Cell::BlackKing);
        let from = Square::new(7, 4);

        let mut ai = MinimaxPlayer::seeded(Difficulty::Medium, 3);
        let jumps = pos.possible_moves(from).jumps;
        assert_eq!(ai.continue_jump(&pos, Side::Black, from, &jumps), None);

        pos.set_cell(Square::new(6, 3), Cell::RedMan);
        pos.set_cell(Square::new(6, 5), Cell::RedKing);
        let jumps = pos.possible_moves(from).jumps;
        assert_eq!(jumps.len(), 2);

        let mv = ai
            .continue_jump(&pos, Side::Black, from, &jumps)
            .expect("a hop is available");
        assert_eq!(mv.from, from);
        assert!(jumps.contains(&mv.to));
    }
}
