use super::Square::Occupied;
use super::{Color, DraughtsBoard, Field, NotationError, NotationResult, Rank, BOARD_SIZE};

/// Rows are listed from row 0 (Dark's home, rank 8) down to row 7. `d`/`D`
/// are dark men/kings, `l`/`L` light ones, digits count empty fields. The
/// second part names the side to move.
pub const INITIAL_POSITION: &str = "1d1d1d1d/d1d1d1d1/1d1d1d1d/8/8/l1l1l1l1/1l1l1l1l/l1l1l1l1 l";

/// Parses a field name like "c3".
pub fn parse_field(square: &str) -> NotationResult<Field> {
    Field::from_algebraic(square).ok_or_else(|| NotationError::InvalidField(square.to_string()))
}

/// Splits a move like "c3-d4", "c3xe5", "c3d4" or "c3 d4" into its source
/// and target fields. Whether the move is legal is up to the board.
pub fn parse_move(text: &str) -> NotationResult<(Field, Field)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != 'x')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(NotationError::InvalidMove(text.to_string()));
    }
    Ok((parse_field(&compact[0..2])?, parse_field(&compact[2..4])?))
}

/// Parses a position string and sets up a DraughtsBoard.
pub fn from_position(position: &str) -> NotationResult<DraughtsBoard> {
    let mut board = DraughtsBoard::new();
    let parts: Vec<&str> = position.split_whitespace().collect();
    if parts.len() != 2 {
        return Err(NotationError::WrongPartCount(parts.len()));
    }

    let rows: Vec<&str> = parts[0].split('/').collect();
    if rows.len() != BOARD_SIZE {
        return Err(NotationError::WrongRowCount(rows.len()));
    }

    for (row_index, row) in rows.iter().enumerate() {
        let mut col_index = 0;

        for c in row.chars() {
            if col_index >= BOARD_SIZE {
                return Err(NotationError::WrongColumnCount {
                    row: row_index,
                    columns: col_index + 1,
                });
            }
            if let Some(empty) = c.to_digit(10) {
                col_index += empty as usize;
                continue;
            }
            let (color, rank) = match c {
                'd' => (Color::Dark, Rank::Man),
                'D' => (Color::Dark, Rank::King),
                'l' => (Color::Light, Rank::Man),
                'L' => (Color::Light, Rank::King),
                _ => return Err(NotationError::InvalidPiece(c)),
            };
            board.place_piece(color, rank, Field::new(row_index as u8, col_index as u8))?;
            col_index += 1;
        }
        if col_index != BOARD_SIZE {
            return Err(NotationError::WrongColumnCount {
                row: row_index,
                columns: col_index,
            });
        }
    }

    match parts[1] {
        "l" => board.set_current_player(Color::Light),
        "d" => board.set_current_player(Color::Dark),
        other => return Err(NotationError::InvalidSideToMove(other.to_string())),
    }

    board.settle_outcome();
    Ok(board)
}

pub fn to_position(board: &DraughtsBoard) -> String {
    let mut board_representation = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0;

        for col in 0..BOARD_SIZE {
            match board.squares[row][col] {
                Occupied(piece) => {
                    if empty_count > 0 {
                        board_representation.push_str(&empty_count.to_string());
                        empty_count = 0;
                    }
                    board_representation.push(piece.to_char());
                }
                _ => empty_count += 1,
            }
        }

        if empty_count > 0 {
            board_representation.push_str(&empty_count.to_string());
        }
        if row < BOARD_SIZE - 1 {
            board_representation.push('/');
        }
    }

    board_representation.push(' ');
    board_representation.push(match board.current_player {
        Color::Light => 'l',
        Color::Dark => 'd',
    });

    board_representation
}
