use super::*;

// ==================== HELPER FUNCTIONS ====================

/// Helper function to create a board from a layout, panicking on typos
pub fn board(layout: &str) -> Position {
    Position::from_layout(layout).expect("test layout should parse")
}

/// Helper function to place a piece on an otherwise untouched board
pub fn place_piece(pos: &mut Position, row: u8, col: u8, cell: Cell) {
    pos.set_cell(Square::new(row, col), cell);
}

/// Helper function to build a sorted list of squares for set comparisons
pub fn squares(coords: &[(u8, u8)]) -> Vec<Square> {
    let mut list: Vec<Square> = coords.iter().map(|&(r, c)| Square::new(r, c)).collect();
    list.sort();
    list
}

/// Helper function to sort a generated destination list
pub fn sorted(list: &[Square]) -> Vec<Square> {
    let mut list = list.to_vec();
    list.sort();
    list
}

/// Helper function to check if a move exists in the move list
pub fn has_move(moves: &[Move], from: (u8, u8), to: (u8, u8)) -> bool {
    moves
        .iter()
        .any(|m| *m == Move::from_coords(from.0, from.1, to.0, to.1))
}

// ==================== TEST MODULES ====================

mod man_movement;
mod king_movement;
mod captures;
