use std::fmt;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row direction a man of this color moves in.
    pub fn forward(&self) -> isize {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }

    /// Farthest row from the home side; a man arriving here is promoted.
    pub fn terminal_row(&self) -> u8 {
        match self {
            Color::Light => 0,
            Color::Dark => 7,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Light => write!(f, "Light"),
            Color::Dark => write!(f, "Dark"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub struct Field {
    pub row: u8,
    pub col: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
    pub field: Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Square {
    Occupied(Piece),
    Empty,
}

/// A one-step diagonal move onto an empty field.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct SimpleMove {
    pub(crate) from: Field,
    pub(crate) to: Field,
}

/// A jump over an opponent piece; `captured` is the field that gets cleared.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub struct Capture {
    pub(crate) from: Field,
    pub(crate) to: Field,
    pub(crate) captured: Field,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone)]
pub enum LegalMove {
    Simple(SimpleMove),
    Capture(Capture),
}

/// Classification of an intended move. Legal variants carry the move so it
/// can be handed to the turn controller as is.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum MoveType {
    NormalMove(SimpleMove),
    CaptureMove(Capture),
    IllegalMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Won(Color),
}

impl Piece {
    pub fn man(color: Color, field: Field) -> Self {
        Self {
            color,
            rank: Rank::Man,
            field,
        }
    }

    pub fn king(color: Color, field: Field) -> Self {
        Self {
            color,
            rank: Rank::King,
            field,
        }
    }

    pub fn is_king(&self) -> bool {
        self.rank == Rank::King
    }

    /// Diagonal row directions this piece may move and capture in.
    pub fn row_directions(&self) -> &'static [isize] {
        match (self.rank, self.color) {
            (Rank::King, _) => &[-1, 1],
            (Rank::Man, Color::Light) => &[-1],
            (Rank::Man, Color::Dark) => &[1],
        }
    }

    pub fn to_char(&self) -> char {
        match (self.color, self.rank) {
            (Color::Light, Rank::Man) => 'l',
            (Color::Light, Rank::King) => 'L',
            (Color::Dark, Rank::Man) => 'd',
            (Color::Dark, Rank::King) => 'D',
        }
    }
}

impl Field {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Field reached by stepping `steps` times along the diagonal
    /// `(d_row, d_col)`, or `None` when that leaves the board.
    pub fn offset(&self, d_row: isize, d_col: isize, steps: isize) -> Option<Field> {
        let row = self.row as isize + d_row * steps;
        let col = self.col as isize + d_col * steps;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Field::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub(crate) fn is_on_board(&self) -> bool {
        (self.row as usize) < BOARD_SIZE && (self.col as usize) < BOARD_SIZE
    }

    pub fn is_dark(&self) -> bool {
        (self.row + self.col) % 2 == 1
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Self> {
        let mut chars = algebraic.chars();
        let file = chars.next()?;
        let rank = chars.next()?;
        if chars.next().is_some() || !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        let col = file as u8 - b'a';
        let row = 7 - (rank as u8 - b'1');
        Some(Self { row, col })
    }

    pub fn as_algebraic(&self) -> String {
        to_algebraic_square(self.row, self.col)
    }
}

impl SimpleMove {
    pub fn from(&self) -> Field {
        self.from
    }

    pub fn to(&self) -> Field {
        self.to
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}-{}", self.from.as_algebraic(), self.to.as_algebraic())
    }
}

impl Capture {
    pub fn from(&self) -> Field {
        self.from
    }

    pub fn to(&self) -> Field {
        self.to
    }

    pub fn captured(&self) -> Field {
        self.captured
    }

    pub fn as_algebraic(&self) -> String {
        format!("{}x{}", self.from.as_algebraic(), self.to.as_algebraic())
    }
}

impl LegalMove {
    pub fn from(&self) -> Field {
        match self {
            LegalMove::Simple(mv) => mv.from,
            LegalMove::Capture(capture) => capture.from,
        }
    }

    pub fn to(&self) -> Field {
        match self {
            LegalMove::Simple(mv) => mv.to,
            LegalMove::Capture(capture) => capture.to,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(self, LegalMove::Capture(_))
    }

    pub fn as_algebraic(&self) -> String {
        match self {
            LegalMove::Simple(mv) => mv.as_algebraic(),
            LegalMove::Capture(capture) => capture.as_algebraic(),
        }
    }
}

impl MoveType {
    pub fn is_legal(&self) -> bool {
        !matches!(self, MoveType::IllegalMove)
    }

    pub fn legal(self) -> Option<LegalMove> {
        match self {
            MoveType::NormalMove(mv) => Some(LegalMove::Simple(mv)),
            MoveType::CaptureMove(capture) => Some(LegalMove::Capture(capture)),
            MoveType::IllegalMove => None,
        }
    }
}

impl GameOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameOutcome::Ongoing => None,
            GameOutcome::Won(color) => Some(*color),
        }
    }
}

pub fn to_algebraic_square(row: u8, col: u8) -> String {
    let file = (b'a' + col) as char; // Convert 0-7 column index to 'a'-'h'
    let rank = 8 - row; // Row 0 is the top of the board, rank 8
    format!("{}{}", file, rank)
}
