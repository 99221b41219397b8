use smallvec::SmallVec;

use super::{man_directions, PossibleMoves, ValidMoves, KING_DIRECTIONS};
use crate::game_repr::{Cell, Move, Position, Side, Square};

impl Position {
    /// Step and jump destinations of the piece on `from`. Both sets are empty for
    /// an empty square. Jumped pieces are reported, never removed.
    pub fn possible_moves(&self, from: Square) -> PossibleMoves {
        let piece = self.cell_at(from);
        let Some(side) = piece.side() else {
            return PossibleMoves::default();
        };

        let directions: SmallVec<[(i8, i8); 4]> = if piece.is_king() {
            SmallVec::from_slice(&KING_DIRECTIONS)
        } else {
            SmallVec::from_slice(&man_directions(side))
        };

        let mut moves = PossibleMoves::default();
        for (dr, dc) in directions {
            let Some(next) = from.offset(dr, dc) else {
                continue;
            };
            let target = self.cell_at(next);
            if target.is_empty() {
                moves.steps.push(next);
            } else if target.is_opponent_of(side) {
                if let Some(landing) = next.offset(dr, dc) {
                    if self.cell_at(landing) == Cell::Empty {
                        moves.jumps.push(landing);
                    }
                }
            }
            // Own pieces block the direction entirely.
        }
        moves
    }

    /// Moves of every piece belonging to `side`, as full source/destination pairs.
    pub fn all_valid_moves(&self, side: Side) -> ValidMoves {
        let mut valid = ValidMoves::default();
        for (from, _) in self.pieces(side) {
            let possible = self.possible_moves(from);
            valid
                .simple
                .extend(possible.steps.iter().map(|&to| Move::new(from, to)));
            valid
                .jumps
                .extend(possible.jumps.iter().map(|&to| Move::new(from, to)));
        }
        valid
    }

    pub fn has_any_move(&self, side: Side) -> bool {
        self.pieces(side)
            .any(|(from, _)| !self.possible_moves(from).is_empty())
    }
}
