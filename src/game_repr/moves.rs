use std::fmt;

pub const BOARD_SIZE: u8 = 8;

/// A board coordinate. Row 0 is the top of the board, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate is outside `0..8`. Out-of-range squares are a
    /// caller bug, never a game condition.
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE && col < BOARD_SIZE,
            "Square ({}, {}) out of bounds (0-7)",
            row,
            col
        );
        Self { row, col }
    }

    /// Bounds-checked constructor for signed arithmetic results.
    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        let size = BOARD_SIZE as i8;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn offset(&self, dr: i8, dc: i8) -> Option<Self> {
        Self::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    /// Dark squares, the only ones pieces ever stand on.
    pub fn is_playable(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Step,
    Jump { captured: Square },
}

/// A source/destination pair. Whether it is a step or a jump follows from the
/// row delta alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }

    pub fn from_coords(from_row: u8, from_col: u8, to_row: u8, to_col: u8) -> Self {
        Self::new(Square::new(from_row, from_col), Square::new(to_row, to_col))
    }

    pub fn is_jump(&self) -> bool {
        self.from.row.abs_diff(self.to.row) > 1
    }

    pub fn kind(&self) -> MoveKind {
        if self.is_jump() {
            MoveKind::Jump {
                captured: Square::new(
                    (self.from.row + self.to.row) / 2,
                    (self.from.col + self.to.col) / 2,
                ),
            }
        } else {
            MoveKind::Step
        }
    }

    /// Square of the piece removed by this move, if it is a jump.
    pub fn captured(&self) -> Option<Square> {
        match self.kind() {
            MoveKind::Jump { captured } => Some(captured),
            MoveKind::Step => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_jump() { "x" } else { "-" };
        write!(f, "{}{}{}", self.from, sep, self.to)
    }
}
