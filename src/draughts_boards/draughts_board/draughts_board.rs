use super::zobrist_hash::ZOBRIST;
use super::{
    notation, BoardError, BoardResult, Color, Field, GameOutcome, NotationResult, Piece, Rank, Square, BOARD_SIZE,
};

/// Number of rows each side fills at the start of a game.
const HOME_ROWS: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraughtsBoard {
    pub(crate) squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub(crate) current_player: Color,
    pub(crate) capture_chain: Option<Field>,
    pub(crate) game_over: bool,
    pub(crate) move_counts: [u32; 2],
    pub(crate) hash: u64,
}

/// Plain copy of everything a host needs to store and later restore a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
    pub current_player: Color,
    pub capture_chain: Option<Field>,
    pub game_over: bool,
    pub move_counts: [u32; 2],
}

impl Default for DraughtsBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl DraughtsBoard {
    /// Creates an empty board with Light to move.
    pub fn new() -> Self {
        Self {
            squares: [[Square::Empty; BOARD_SIZE]; BOARD_SIZE],
            current_player: Color::Light,
            capture_chain: None,
            game_over: false,
            move_counts: [1, 1],
            hash: 0,
        }
    }

    /// Creates the starting position: twelve men per side on the dark cells
    /// of the three rows nearest each player.
    pub fn initial() -> Self {
        let mut board = Self::new();
        board.setup_pieces(Color::Dark, 0..HOME_ROWS);
        board.setup_pieces(Color::Light, BOARD_SIZE as u8 - HOME_ROWS..BOARD_SIZE as u8);
        board.hash = ZOBRIST.calculate_hash(&board);
        board
    }

    fn setup_pieces(&mut self, color: Color, rows: std::ops::Range<u8>) {
        for row in rows {
            for col in 0..BOARD_SIZE as u8 {
                let field = Field::new(row, col);
                if field.is_dark() {
                    self.squares[row as usize][col as usize] = Square::Occupied(Piece::man(color, field));
                }
            }
        }
    }

    /// Delegates parsing to the `notation` module.
    pub fn from_position(position: &str) -> NotationResult<Self> {
        notation::from_position(position)
    }

    pub fn to_position(&self) -> String {
        notation::to_position(self)
    }

    /// Puts a new piece on an empty dark field. Meant for setting up
    /// positions; during play the turn controller is the only writer.
    pub fn place_piece(&mut self, color: Color, rank: Rank, field: Field) -> BoardResult<()> {
        if !field.is_on_board() {
            return Err(BoardError::OffBoard(field));
        }
        if !field.is_dark() {
            return Err(BoardError::LightSquare(field));
        }
        if self.piece_at(field).is_some() {
            return Err(BoardError::Occupied(field));
        }
        let piece = Piece { color, rank, field };
        self.squares[field.row as usize][field.col as usize] = Square::Occupied(piece);
        self.hash = ZOBRIST.update_piece(self.hash, &piece);
        Ok(())
    }

    /// Hands the move to `color`. Set-up only.
    pub fn set_current_player(&mut self, color: Color) {
        if self.current_player != color {
            self.current_player = color;
            self.hash = ZOBRIST.update_active_side(self.hash);
        }
    }

    pub fn square(&self, field: Field) -> Square {
        self.squares[field.row as usize][field.col as usize]
    }

    pub fn piece_at(&self, field: Field) -> Option<&Piece> {
        match &self.squares[field.row as usize][field.col as usize] {
            Square::Occupied(piece) => Some(piece),
            Square::Empty => None,
        }
    }

    /// Returns an iterator over all pieces on the board, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().filter_map(|square| match square {
            Square::Occupied(piece) => Some(piece),
            Square::Empty => None,
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |piece| piece.color == color)
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// The piece that has to continue capturing before the turn can end.
    pub fn capture_chain(&self) -> Option<Field> {
        self.capture_chain
    }

    pub fn capture_chain_active(&self) -> bool {
        self.capture_chain.is_some()
    }

    /// True once the turn controller has recorded a winner.
    pub fn is_game_won(&self) -> bool {
        self.game_over
    }

    pub fn move_count(&self, color: Color) -> u32 {
        self.move_counts[color.index()]
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            squares: self.squares,
            current_player: self.current_player,
            capture_chain: self.capture_chain,
            game_over: self.game_over,
            move_counts: self.move_counts,
        }
    }

    pub fn restore(snapshot: &BoardSnapshot) -> Self {
        let mut board = Self {
            squares: snapshot.squares,
            current_player: snapshot.current_player,
            capture_chain: snapshot.capture_chain,
            game_over: snapshot.game_over,
            move_counts: snapshot.move_counts,
            hash: 0,
        };
        board.hash = ZOBRIST.calculate_hash(&board);
        board.settle_outcome();
        board
    }

    /// Marks a board built from outside play as finished when one side
    /// already has no move left. A running capture chain is left alone.
    pub(crate) fn settle_outcome(&mut self) {
        if self.capture_chain.is_none() && self.game_outcome() != GameOutcome::Ongoing {
            self.game_over = true;
        }
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for row in 0..BOARD_SIZE {
            let rank = BOARD_SIZE - row;
            board_representation.push_str(&format!("{} │", rank));
            for col in 0..BOARD_SIZE {
                let square = match &self.squares[row][col] {
                    Square::Empty => ' ',
                    Square::Occupied(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", rank));

            if row < BOARD_SIZE - 1 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}
