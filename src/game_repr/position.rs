use super::*;
use std::fmt;
use std::str::FromStr;

/*
 * MODULE IS RESPONSIBLE FOR
 * BOARD REPRESENTATION AND MOVE APPLICATION
 */

const ROWS: usize = BOARD_SIZE as usize;

/// 8x8 grid of cells, row-major. Copying a position is a plain memcpy, which is
/// how the search explores hypothetical futures without touching the live game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    cells: [[Cell; ROWS]; ROWS],
}

impl Default for Position {
    fn default() -> Self {
        Self::starting()
    }
}

impl Position {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; ROWS]; ROWS],
        }
    }

    /// Black men on the top three rows, Red men on the bottom three.
    pub fn starting() -> Self {
        let mut pos = Self::empty();
        for sq in Square::all().filter(|sq| sq.is_playable()) {
            match sq.row() {
                0..=2 => pos.set_cell(sq, Cell::BlackMan),
                5..=7 => pos.set_cell(sq, Cell::RedMan),
                _ => {}
            }
        }
        pos
    }

    /// Parse eight rows of glyphs: `.` empty, `r`/`R` red man/king, `b`/`B` black
    /// man/king, `-` for the light squares. Whitespace inside a row is ignored and
    /// blank lines are skipped.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != ROWS {
            return Err(LayoutError::RowCount { found: rows.len() });
        }

        let mut pos = Self::empty();
        for (row, glyphs) in rows.iter().enumerate() {
            if glyphs.len() != ROWS {
                return Err(LayoutError::RowWidth {
                    row,
                    found: glyphs.len(),
                });
            }
            for (col, &glyph) in glyphs.iter().enumerate() {
                let sq = Square::new(row as u8, col as u8);
                if glyph == '-' && !sq.is_playable() {
                    continue;
                }
                let cell = Cell::from_char(glyph)
                    .ok_or(LayoutError::UnknownGlyph { glyph, row, col })?;
                if !cell.is_empty() && !sq.is_playable() {
                    return Err(LayoutError::PieceOnLightSquare { row, col });
                }
                pos.set_cell(sq, cell);
            }
        }
        Ok(pos)
    }

    pub fn cell_at(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set_cell(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Squares occupied by `side`, in row-major order.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Cell)> + '_ {
        Square::all()
            .map(move |sq| (sq, self.cell_at(sq)))
            .filter(move |(_, cell)| cell.belongs_to(side))
    }

    pub fn count(&self, cell: Cell) -> usize {
        Square::all().filter(|&sq| self.cell_at(sq) == cell).count()
    }

    /// Relocate a piece, remove the jumped piece and crown a man reaching its far
    /// row. Returns the touched squares `[from, to]`.
    ///
    /// No legality check: callers pass moves taken from `possible_moves` or
    /// `all_valid_moves`. Use [`Position::apply_legal_move`] for untrusted input.
    pub fn apply_move(&mut self, mv: Move) -> [Square; 2] {
        let piece = self.cell_at(mv.from);
        debug_assert!(!piece.is_empty(), "apply_move from empty square {}", mv.from);

        self.set_cell(mv.to, piece);
        self.set_cell(mv.from, Cell::Empty);

        if let Some(captured) = mv.captured() {
            self.set_cell(captured, Cell::Empty);
        }

        if piece.is_man() {
            if let Some(side) = piece.side() {
                if mv.to.row() == side.promotion_row() {
                    self.set_cell(mv.to, piece.promoted());
                }
            }
        }

        [mv.from, mv.to]
    }

    /// Apply `mv` for `side` after checking it against the piece's step and jump
    /// destinations. Forced capture is not enforced here; that rule belongs to
    /// the search.
    pub fn apply_legal_move(&mut self, mv: Move, side: Side) -> Result<[Square; 2], MoveError> {
        let piece = self.cell_at(mv.from);
        if piece.is_empty() {
            return Err(MoveError::EmptySource { square: mv.from });
        }
        if !piece.belongs_to(side) {
            return Err(MoveError::WrongSide {
                square: mv.from,
                side,
            });
        }
        if !self.possible_moves(mv.from).contains(mv.to) {
            return Err(MoveError::IllegalDestination {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(self.apply_move(mv))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            let glyphs: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    if (row + col) % 2 == 1 {
                        cell.to_char().to_string()
                    } else {
                        "-".to_string()
                    }
                })
                .collect();
            writeln!(f, "{}", glyphs.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Position {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_layout(s)
    }
}
