#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Moves first and advances toward row 0.
    Red,
    /// Advances toward row 7. The computer opponent plays this side by default.
    Black,
}

impl Side {
    pub fn opposite(&self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row delta of a man's forward step.
    pub fn forward(&self) -> i8 {
        match self {
            Self::Red => -1,
            Self::Black => 1,
        }
    }

    /// Row on which this side's men are crowned.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => 7,
        }
    }

    /// Scores are always from Black's point of view, so Black maximizes.
    pub fn is_maximizer(&self) -> bool {
        *self == Self::Black
    }

    pub fn from_maximizing(maximizing: bool) -> Self {
        if maximizing {
            Self::Black
        } else {
            Self::Red
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Content of a single board square. Side and rank live in one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    RedMan,
    BlackMan,
    RedKing,
    BlackKing,
}

impl Cell {
    pub fn man(side: Side) -> Self {
        match side {
            Side::Red => Self::RedMan,
            Side::Black => Self::BlackMan,
        }
    }

    pub fn king(side: Side) -> Self {
        match side {
            Side::Red => Self::RedKing,
            Side::Black => Self::BlackKing,
        }
    }

    pub fn side(&self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::RedMan | Self::RedKing => Some(Side::Red),
            Self::BlackMan | Self::BlackKing => Some(Side::Black),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::Empty
    }

    pub fn is_king(&self) -> bool {
        matches!(self, Self::RedKing | Self::BlackKing)
    }

    pub fn is_man(&self) -> bool {
        matches!(self, Self::RedMan | Self::BlackMan)
    }

    pub fn belongs_to(&self, side: Side) -> bool {
        self.side() == Some(side)
    }

    /// True when the cell holds a man or king of the side opposing `side`.
    pub fn is_opponent_of(&self, side: Side) -> bool {
        self.side() == Some(side.opposite())
    }

    /// The crowned version of this piece. Kings and empty cells are unchanged.
    pub fn promoted(&self) -> Self {
        match self {
            Self::RedMan => Self::RedKing,
            Self::BlackMan => Self::BlackKing,
            other => *other,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Self::Empty => '.',
            Self::RedMan => 'r',
            Self::BlackMan => 'b',
            Self::RedKing => 'R',
            Self::BlackKing => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Self::Empty),
            'r' => Some(Self::RedMan),
            'b' => Some(Self::BlackMan),
            'R' => Some(Self::RedKing),
            'B' => Some(Self::BlackKing),
            _ => None,
        }
    }
}
