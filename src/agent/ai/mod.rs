// AI Agent - Minimax with Alpha-Beta Pruning
//
// Key features:
// - Forced captures: when a jump exists, only jumps are searched
// - Alpha-beta pruning over a fixed depth, static material evaluation at leaves
// - Per-node epsilon randomization for difficulty tuning
// - Injectable random source for reproducible games and tests

mod evaluation;
mod minimax_player;
mod search;

pub use evaluation::{evaluate, piece_value, KING_VALUE, MAN_VALUE};
pub use minimax_player::{ai_make_move, Difficulty, MinimaxPlayer};
pub use search::{minimax, search, search_among, SearchResult, MAX_SCORE, MIN_SCORE};
