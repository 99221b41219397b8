//! Error types for the rules engine
//!
//! Out-of-range coordinates are not represented here: they are caller bugs and
//! panic in `Square::new`.

use super::{Side, Square};

/// Reasons a checked move application is rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// No piece stands on the source square
    #[error("No piece on source square {square}")]
    EmptySource { square: Square },

    /// The source piece belongs to the other side
    #[error("Piece on {square} does not belong to {side}")]
    WrongSide { square: Square, side: Side },

    /// Destination is not among the piece's step or jump destinations
    #[error("Piece on {from} cannot move to {to}")]
    IllegalDestination { from: Square, to: Square },
}

/// Errors produced while parsing a textual board layout
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("Expected 8 rows, found {found}")]
    RowCount { found: usize },

    #[error("Row {row} has {found} squares, expected 8")]
    RowWidth { row: usize, found: usize },

    #[error("Unknown glyph '{glyph}' at row {row}, column {col}")]
    UnknownGlyph { glyph: char, row: usize, col: usize },

    #[error("Piece on non-playable square at row {row}, column {col}")]
    PieceOnLightSquare { row: usize, col: usize },
}
