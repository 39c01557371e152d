use super::{Color, DraughtsBoard, Field, Rank};

pub fn assert_moves<S: AsRef<str>, I: IntoIterator<Item = S>>(generated: I, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<String> = generated.into_iter().map(|m| m.as_ref().to_string()).collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}

pub fn field(algebraic: &str) -> Field {
    Field::from_algebraic(algebraic).unwrap()
}

/// Empty board with the given pieces and Light to move.
pub fn board_with(pieces: &[(Color, Rank, &str)]) -> DraughtsBoard {
    let mut board = DraughtsBoard::new();
    for &(color, rank, square) in pieces {
        board.place_piece(color, rank, field(square)).unwrap();
    }
    board
}
