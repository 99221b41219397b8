// Position evaluation function
// Returns material balance from Black's point of view (positive = good for Black)

use crate::game_repr::{Cell, Position, Square};

// Material values
pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 3;

/// Signed value of a single cell, Black positive.
pub fn piece_value(cell: Cell) -> i32 {
    match cell {
        Cell::Empty => 0,
        Cell::BlackMan => MAN_VALUE,
        Cell::BlackKing => KING_VALUE,
        Cell::RedMan => -MAN_VALUE,
        Cell::RedKing => -KING_VALUE,
    }
}

/// Static material score. No lookahead, mobility or positional terms.
pub fn evaluate(pos: &Position) -> i32 {
    Square::all().map(|sq| piece_value(pos.cell_at(sq))).sum()
}
