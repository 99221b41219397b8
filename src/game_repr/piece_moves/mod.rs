mod diagonal;

use smallvec::SmallVec;

use super::{Move, Side, Square};

/// Inline capacity covers ordinary positions; a crowd of kings spills to the heap.
pub type MoveList = SmallVec<[Move; 32]>;

/// Destinations reachable from one square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PossibleMoves {
    pub steps: SmallVec<[Square; 4]>,
    pub jumps: SmallVec<[Square; 4]>,
}

impl PossibleMoves {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.jumps.is_empty()
    }

    pub fn contains(&self, to: Square) -> bool {
        self.steps.contains(&to) || self.jumps.contains(&to)
    }

    /// Steps followed by jumps, the set a human may pick from.
    pub fn destinations(&self) -> impl Iterator<Item = Square> + '_ {
        self.steps.iter().chain(self.jumps.iter()).copied()
    }
}

/// Every move available to one side, split by kind. Order carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidMoves {
    pub simple: MoveList,
    pub jumps: MoveList,
}

impl ValidMoves {
    /// No step and no jump: the side to move is stuck.
    pub fn is_empty(&self) -> bool {
        self.simple.is_empty() && self.jumps.is_empty()
    }

    pub fn len(&self) -> usize {
        self.simple.len() + self.jumps.len()
    }

    /// Candidates under the forced-capture rule: jumps if any exist, steps otherwise.
    pub fn candidates(&self) -> &[Move] {
        if self.jumps.is_empty() {
            &self.simple
        } else {
            &self.jumps
        }
    }

    pub fn into_candidates(self) -> MoveList {
        if self.jumps.is_empty() {
            self.simple
        } else {
            self.jumps
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Move> {
        self.simple.iter().chain(self.jumps.iter())
    }
}

/// Direction set of a man of `side`: the two forward diagonals.
pub fn man_directions(side: Side) -> [(i8, i8); 2] {
    let dr = side.forward();
    [(dr, -1), (dr, 1)]
}

pub const KING_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
