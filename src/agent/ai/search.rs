// Minimax Search with Alpha-Beta Pruning and Epsilon Noise
//
// Scores are always from Black's point of view, so Black nodes maximize and
// Red nodes minimize. Every node:
// - applies the forced-capture rule (jumps only, when any jump exists)
// - shuffles its candidates, so ties are broken at random
// - after each child, with probability epsilon, replaces its best move with a
//   random candidate and stops looking at further children
//
// Children are searched on copies of the position; the caller's board is never
// touched.

use rand::seq::SliceRandom;
use rand::Rng;

use super::evaluation::evaluate;
use crate::game_repr::{Move, MoveList, Position, Side};

/// Lower bound for the root window (below any reachable evaluation)
pub const MIN_SCORE: i32 = -1_000_000;

/// Upper bound for the root window
pub const MAX_SCORE: i32 = 1_000_000;

/// Result of a root search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes_searched: u64,
}

struct Search<'a, R: Rng + ?Sized> {
    epsilon: f64,
    rng: &'a mut R,
    nodes: u64,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    fn node(
        &mut self,
        pos: &Position,
        depth: u8,
        maximizing: bool,
        alpha: i32,
        beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        if depth == 0 {
            return (evaluate(pos), None);
        }

        let moves = pos
            .all_valid_moves(Side::from_maximizing(maximizing))
            .into_candidates();

        // Side to move is stuck: terminal for this subtree
        if moves.is_empty() {
            return (evaluate(pos), None);
        }

        self.expand(pos, moves, depth, maximizing, alpha, beta)
    }

    /// Search the children reached by `moves`. `depth` must be at least 1 and
    /// `moves` non-empty.
    fn expand(
        &mut self,
        pos: &Position,
        mut moves: MoveList,
        depth: u8,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        moves.shuffle(&mut *self.rng);

        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for &mv in moves.iter() {
            let mut child = *pos;
            child.apply_move(mv);

            let (score, _) = self.node(&child, depth - 1, !maximizing, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }

            if self.rng.gen::<f64>() < self.epsilon {
                best_move = moves.choose(&mut *self.rng).copied();
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Minimax with alpha-beta pruning and per-node epsilon randomization
///
/// `maximizing` selects the side to move (Black when true). Returns the score
/// of the position and the chosen move, or `None` at a leaf or when the side to
/// move has no legal move.
pub fn minimax<R: Rng + ?Sized>(
    pos: &Position,
    depth: u8,
    maximizing: bool,
    alpha: i32,
    beta: i32,
    epsilon: f64,
    rng: &mut R,
) -> (i32, Option<Move>) {
    let mut search = Search {
        epsilon,
        rng,
        nodes: 0,
    };
    search.node(pos, depth, maximizing, alpha, beta)
}

/// Full-window search for `side` from the root
pub fn search<R: Rng + ?Sized>(
    pos: &Position,
    side: Side,
    depth: u8,
    epsilon: f64,
    rng: &mut R,
) -> SearchResult {
    let mut search = Search {
        epsilon,
        rng,
        nodes: 0,
    };
    let (score, best_move) = search.node(pos, depth, side.is_maximizer(), MIN_SCORE, MAX_SCORE);

    log::debug!(
        "search side {} depth {} epsilon {} score {} nodes {} move {:?}",
        side,
        depth,
        epsilon,
        score,
        search.nodes,
        best_move.map(|mv| mv.to_string())
    );

    SearchResult {
        best_move,
        score,
        nodes_searched: search.nodes,
    }
}

/// Root search restricted to `candidates`, all assumed legal for `side`
///
/// Used to pick the next hop of a jump chain, where only the moved piece's jumps
/// are on offer.
pub fn search_among<R: Rng + ?Sized>(
    pos: &Position,
    candidates: &[Move],
    side: Side,
    depth: u8,
    epsilon: f64,
    rng: &mut R,
) -> SearchResult {
    if candidates.is_empty() {
        return SearchResult {
            best_move: None,
            score: evaluate(pos),
            nodes_searched: 0,
        };
    }

    let mut search = Search {
        epsilon,
        rng,
        nodes: 1,
    };
    let (score, best_move) = search.expand(
        pos,
        MoveList::from_slice(candidates),
        depth.max(1),
        side.is_maximizer(),
        MIN_SCORE,
        MAX_SCORE,
    );

    SearchResult {
        best_move,
        score,
        nodes_searched: search.nodes,
    }
}
