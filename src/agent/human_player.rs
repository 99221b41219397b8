//! Human player implementation that reads moves from a line-oriented terminal.
//!
//! `HumanPlayer` is generic over its input and output streams so the same code
//! drives stdin/stdout in the binary and in-memory buffers in tests.
//!
//! # Input Handling
//!
//! Coordinates are `row col` pairs; any non-digit characters separate numbers, so
//! `5 2 4 1`, `5,2 4,1` and `(5,2)-(4,1)` are all the same move.
//! - **Two numbers**: select a piece and list its destinations (marked `*`)
//! - **Four numbers**: make a move, checked against the piece's destinations
//! - **`q`, or end of input**: resign
//!
//! After a jump the orchestrator may offer another hop; the player answers with
//! the landing square, or an empty line to stop.

use std::io::{BufRead, Write};

use crate::agent::player::{GameResult, Player};
use crate::game_repr::{Move, Position, Side, Square, BOARD_SIZE};

/// Reasons a line of terminal input could not be read as coordinates
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("No coordinates given")]
    Empty,

    #[error("Coordinate {value} is off the board (0-7)")]
    OutOfRange { value: String },

    #[error("Expected {expected} numbers, found {found}")]
    Count { expected: &'static str, found: usize },
}

/// Split a line into board coordinates.
pub fn parse_coordinates(line: &str) -> Result<Vec<u8>, InputError> {
    let parts: Vec<&str> = line
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        return Err(InputError::Empty);
    }
    parts
        .into_iter()
        .map(|part| match part.parse::<u8>() {
            Ok(value) if value < BOARD_SIZE => Ok(value),
            _ => Err(InputError::OutOfRange {
                value: part.to_string(),
            }),
        })
        .collect()
}

/// Board with row/column indices. Empty squares listed in `marks` show as `*`.
pub fn render_board(position: &Position, marks: &[Square]) -> String {
    let mut out = String::from("   0 1 2 3 4 5 6 7\n");
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{}  ", row));
        let glyphs: Vec<String> = (0..BOARD_SIZE)
            .map(|col| {
                let sq = Square::new(row, col);
                let cell = position.cell_at(sq);
                if !sq.is_playable() {
                    "-".to_string()
                } else if cell.is_empty() && marks.contains(&sq) {
                    "*".to_string()
                } else {
                    cell.to_char().to_string()
                }
            })
            .collect();
        out.push_str(&glyphs.join(" "));
        out.push('\n');
    }
    out
}

/// Final board without destination marks, followed by the result line.
pub fn render_outcome(position: &Position, result: GameResult, plies: u32) -> String {
    let mut out = render_board(position, &[]);
    out.push_str(&format!("{} after {} plies\n", result, plies));
    out
}

/// Human player that makes moves by typing coordinates.
pub struct HumanPlayer<I, O> {
    /// Source of typed lines
    input: I,

    /// Prompts and board renderings go here
    output: O,

    /// Display name for this player
    name: String,
}

impl<I: BufRead, O: Write> HumanPlayer<I, O> {
    pub fn new(input: I, output: O, name: String) -> Self {
        Self {
            input,
            output,
            name,
        }
    }

    /// Next line of input, or `None` once the input is closed.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line.trim().to_string()),
            Err(err) => {
                log::warn!("[{}] failed to read input: {}", self.name, err);
                None
            }
        }
    }

    fn say(&mut self, text: &str) {
        // A closed terminal shows up as end of input on the next read.
        let _ = writeln!(self.output, "{}", text);
        let _ = self.output.flush();
    }

    fn is_resignation(line: &str) -> bool {
        matches!(line.to_ascii_lowercase().as_str(), "q" | "quit" | "resign")
    }
}

impl<I: BufRead, O: Write> Player for HumanPlayer<I, O> {
    fn get_move(&mut self, position: &Position, side: Side) -> Option<Move> {
        let mut marks: Vec<Square> = Vec::new();
        loop {
            let board = render_board(position, &marks);
            self.say(&board);
            self.say(&format!(
                "{} ({}) to move: enter 'row col' to select or 'row col row col' to move, 'q' to resign",
                side, self.name
            ));

            let line = self.read_line()?;
            if Self::is_resignation(&line) {
                return None;
            }

            let coords = match parse_coordinates(&line) {
                Ok(coords) => coords,
                Err(err) => {
                    log::warn!("[{}] rejected input {:?}: {}", self.name, line, err);
                    self.say(&err.to_string());
                    continue;
                }
            };

            match coords.as_slice() {
                &[row, col] => {
                    let from = Square::new(row, col);
                    if !position.cell_at(from).belongs_to(side) {
                        self.say(&format!("No {} piece on {}", side, from));
                        marks.clear();
                        continue;
                    }
                    marks = position.possible_moves(from).destinations().collect();
                    let listed: Vec<String> = marks.iter().map(Square::to_string).collect();
                    self.say(&format!("Destinations from {}: {}", from, listed.join(" ")));
                }
                &[from_row, from_col, to_row, to_col] => {
                    let mv = Move::from_coords(from_row, from_col, to_row, to_col);
                    let mut probe = *position;
                    match probe.apply_legal_move(mv, side) {
                        Ok(_) => return Some(mv),
                        Err(err) => {
                            log::warn!("[{}] rejected move {}: {}", self.name, mv, err);
                            self.say(&err.to_string());
                            marks.clear();
                        }
                    }
                }
                other => {
                    let err = InputError::Count {
                        expected: "2 or 4",
                        found: other.len(),
                    };
                    self.say(&err.to_string());
                }
            }
        }
    }

    fn continue_jump(
        &mut self,
        position: &Position,
        side: Side,
        from: Square,
        jumps: &[Square],
    ) -> Option<Move> {
        loop {
            let board = render_board(position, jumps);
            self.say(&board);
            let listed: Vec<String> = jumps.iter().map(Square::to_string).collect();
            self.say(&format!(
                "{} ({}): continue jumping from {}? Enter one of {} or an empty line to stop",
                side,
                self.name,
                from,
                listed.join(" ")
            ));

            let line = self.read_line()?;
            if line.is_empty() || line.eq_ignore_ascii_case("n") || line.eq_ignore_ascii_case("no") {
                return None;
            }

            match parse_coordinates(&line) {
                Ok(coords) => match coords.as_slice() {
                    &[row, col] => {
                        let to = Square::new(row, col);
                        if jumps.contains(&to) {
                            return Some(Move::new(from, to));
                        }
                        self.say(&format!("{} is not a jump landing", to));
                    }
                    other => {
                        let err = InputError::Count {
                            expected: "2",
                            found: other.len(),
                        };
                        self.say(&err.to_string());
                    }
                },
                Err(err) => self.say(&err.to_string()),
            }
        }
    }

    fn opponent_moved(&mut self, mv: Move) {
        self.say(&format!("Opponent played {}", mv));
    }

    fn game_ended(&mut self, result: GameResult) {
        self.say(&format!("Game over: {}", result));
    }

    fn name(&self) -> &str {
        &self.name
    }
}
