use super::{Capture, Color, DraughtsBoard, Field, GameOutcome, LegalMove, MoveType, Piece, SimpleMove};

const COLUMN_DIRECTIONS: [isize; 2] = [-1, 1];

impl DraughtsBoard {
    /// Decides whether moving the piece on `from` to `target` is a simple
    /// move, a capture or illegal. Nothing is changed on the board.
    pub fn classify_move(&self, from: Field, target: Field) -> MoveType {
        if self.game_over {
            return MoveType::IllegalMove;
        }
        let piece = match self.piece_at(from) {
            Some(piece) => piece,
            None => return MoveType::IllegalMove,
        };

        if let Some(chaining) = self.capture_chain {
            // Only the chaining piece may act, and only by capturing again
            if chaining != from {
                return MoveType::IllegalMove;
            }
        } else if let Some(mv) = self
            .legal_simple_moves(piece, self.current_player)
            .into_iter()
            .find(|mv| mv.to == target)
        {
            return MoveType::NormalMove(mv);
        }

        self.legal_captures(piece, self.current_player)
            .into_iter()
            .find(|capture| capture.to == target)
            .map_or(MoveType::IllegalMove, MoveType::CaptureMove)
    }

    /// One-step diagonal moves onto empty fields. Men only step toward their
    /// terminal row, kings step in all four directions. Empty when the piece
    /// does not belong to `current_player`.
    pub fn legal_simple_moves(&self, piece: &Piece, current_player: Color) -> Vec<SimpleMove> {
        let mut moves = Vec::new();
        if piece.color != current_player {
            return moves;
        }

        for &d_row in piece.row_directions() {
            for &d_col in &COLUMN_DIRECTIONS {
                if let Some(to) = piece.field.offset(d_row, d_col, 1) {
                    if self.piece_at(to).is_none() {
                        moves.push(SimpleMove { from: piece.field, to });
                    }
                }
            }
        }
        moves
    }

    /// Short jumps over an adjacent opponent piece onto the empty field right
    /// behind it, in every direction the piece may move in.
    pub fn legal_captures(&self, piece: &Piece, current_player: Color) -> Vec<Capture> {
        let mut captures = Vec::new();
        if piece.color != current_player {
            return captures;
        }

        for &d_row in piece.row_directions() {
            for &d_col in &COLUMN_DIRECTIONS {
                let (Some(over), Some(to)) = (
                    piece.field.offset(d_row, d_col, 1),
                    piece.field.offset(d_row, d_col, 2),
                ) else {
                    continue;
                };
                let jumps_opponent = matches!(self.piece_at(over), Some(jumped) if jumped.color != current_player);
                if jumps_opponent && self.piece_at(to).is_none() {
                    captures.push(Capture {
                        from: piece.field,
                        to,
                        captured: over,
                    });
                }
            }
        }
        captures
    }

    fn has_any_move(&self, piece: &Piece) -> bool {
        !self.legal_simple_moves(piece, piece.color).is_empty() || !self.legal_captures(piece, piece.color).is_empty()
    }

    /// A side without a single simple move or capture has lost; this covers
    /// both elimination and blockade. Dark is checked first.
    pub fn game_outcome(&self) -> GameOutcome {
        let mut light_has_moves = false;
        let mut dark_has_moves = false;

        for piece in self.pieces() {
            let has_moves = match piece.color {
                Color::Light => &mut light_has_moves,
                Color::Dark => &mut dark_has_moves,
            };
            if !*has_moves && self.has_any_move(piece) {
                *has_moves = true;
            }
            if light_has_moves && dark_has_moves {
                break;
            }
        }

        if !dark_has_moves {
            GameOutcome::Won(Color::Light)
        } else if !light_has_moves {
            GameOutcome::Won(Color::Dark)
        } else {
            GameOutcome::Ongoing
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_outcome() != GameOutcome::Ongoing
    }

    /// True while the piece on `field` is in the middle of a capture chain
    /// and has to capture again.
    pub fn forced_capture_pending(&self, field: Field) -> bool {
        self.capture_chain == Some(field)
    }

    /// Every action the player to move may submit right now.
    pub fn generate_legal_moves(&self) -> Vec<LegalMove> {
        let mut legal_moves = Vec::new();
        if self.game_over {
            return legal_moves;
        }

        if let Some(chaining) = self.capture_chain {
            if let Some(piece) = self.piece_at(chaining) {
                legal_moves.extend(
                    self.legal_captures(piece, self.current_player)
                        .into_iter()
                        .map(LegalMove::Capture),
                );
            }
            return legal_moves;
        }

        for piece in self.pieces_of(self.current_player) {
            legal_moves.extend(
                self.legal_simple_moves(piece, self.current_player)
                    .into_iter()
                    .map(LegalMove::Simple),
            );
            legal_moves.extend(
                self.legal_captures(piece, self.current_player)
                    .into_iter()
                    .map(LegalMove::Capture),
            );
        }
        legal_moves
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::{assert_moves, board_with, field};
    use super::super::{Rank, Square};
    use super::*;

    fn piece(board: &DraughtsBoard, square: &str) -> Piece {
        *board.piece_at(field(square)).unwrap()
    }

    fn simple_moves(board: &DraughtsBoard, square: &str) -> Vec<String> {
        let p = piece(board, square);
        board
            .legal_simple_moves(&p, p.color)
            .iter()
            .map(|m| m.as_algebraic())
            .collect()
    }

    fn captures(board: &DraughtsBoard, square: &str) -> Vec<String> {
        let p = piece(board, square);
        board
            .legal_captures(&p, p.color)
            .iter()
            .map(|c| c.as_algebraic())
            .collect()
    }

    #[test]
    fn test_man_moves_forward_only() {
        // Light man on d4 (row 4, col 3)
        let board = board_with(&[(Color::Light, Rank::Man, "d4")]);
        assert_moves(simple_moves(&board, "d4"), vec!["d4-c5", "d4-e5"]);

        let board = board_with(&[(Color::Dark, Rank::Man, "d4")]);
        assert_moves(simple_moves(&board, "d4"), vec!["d4-c3", "d4-e3"]);
    }

    #[test]
    fn test_king_moves_all_diagonals() {
        for color in [Color::Light, Color::Dark] {
            let board = board_with(&[(color, Rank::King, "d4")]);
            assert_moves(simple_moves(&board, "d4"), vec!["d4-c3", "d4-c5", "d4-e3", "d4-e5"]);
        }
    }

    #[test]
    fn test_king_moves_are_union_of_directions() {
        let board = board_with(&[(Color::Light, Rank::King, "d4")]);
        let king = piece(&board, "d4");
        let light_man = Piece::man(Color::Light, king.field);
        let dark_man = Piece::man(Color::Dark, king.field);

        let mut union: Vec<String> = board
            .legal_simple_moves(&light_man, Color::Light)
            .iter()
            .chain(board.legal_simple_moves(&dark_man, Color::Dark).iter())
            .map(|m| m.to.as_algebraic())
            .collect();
        union.sort();
        let mut king_moves: Vec<String> = board
            .legal_simple_moves(&king, Color::Light)
            .iter()
            .map(|m| m.to.as_algebraic())
            .collect();
        king_moves.sort();
        assert_eq!(king_moves, union);
    }

    #[test]
    fn test_moves_stay_on_board_and_off_pieces() {
        let board = board_with(&[
            (Color::Light, Rank::King, "a1"),
            (Color::Light, Rank::Man, "h2"),
            (Color::Dark, Rank::Man, "g3"),
        ]);
        assert_moves(simple_moves(&board, "a1"), vec!["a1-b2"]);
        assert_moves(simple_moves(&board, "h2"), vec![]);
    }

    #[test]
    fn test_opponent_piece_has_no_moves() {
        let board = board_with(&[(Color::Dark, Rank::Man, "d4")]);
        let p = piece(&board, "d4");
        assert!(board.legal_simple_moves(&p, Color::Light).is_empty());
        assert!(board.legal_captures(&p, Color::Light).is_empty());
    }

    #[test]
    fn test_initial_position_moves() {
        let board = DraughtsBoard::initial();
        assert_moves(simple_moves(&board, "c3"), vec!["c3-b4", "c3-d4"]);
        assert_moves(simple_moves(&board, "h2"), vec![]);
        let moves: Vec<String> = board.generate_legal_moves().iter().map(|m| m.as_algebraic()).collect();
        assert_moves(
            moves,
            vec!["a3-b4", "c3-b4", "c3-d4", "e3-d4", "e3-f4", "g3-f4", "g3-h4"],
        );
    }

    #[test]
    fn test_capture_scenario() {
        // Dark man on (4,3), Light man on (5,4), (3,2) empty
        let mut board = DraughtsBoard::new();
        board.place_piece(Color::Dark, Rank::Man, Field::new(4, 3)).unwrap();
        board.place_piece(Color::Light, Rank::Man, Field::new(5, 4)).unwrap();
        let light = piece(&board, "e3");

        let captures = board.legal_captures(&light, Color::Light);
        assert_eq!(captures.len(), 1);
        assert_eq!(captures[0].to(), Field::new(3, 2));
        assert_eq!(captures[0].captured(), Field::new(4, 3));
    }

    #[test]
    fn test_capture_requires_opponent_and_empty_landing() {
        // Own piece in the way
        let board = board_with(&[(Color::Light, Rank::Man, "e3"), (Color::Light, Rank::Man, "d4")]);
        assert_moves(captures(&board, "e3"), vec![]);

        // Landing field occupied
        let board = board_with(&[
            (Color::Light, Rank::Man, "e3"),
            (Color::Dark, Rank::Man, "d4"),
            (Color::Dark, Rank::Man, "c5"),
        ]);
        assert_moves(captures(&board, "e3"), vec![]);

        // Landing field off the board
        let board = board_with(&[(Color::Light, Rank::Man, "b4"), (Color::Dark, Rank::Man, "a5")]);
        assert_moves(captures(&board, "b4"), vec![]);
    }

    #[test]
    fn test_man_does_not_capture_backwards() {
        let board = board_with(&[(Color::Light, Rank::Man, "d4"), (Color::Dark, Rank::Man, "c3")]);
        assert_moves(captures(&board, "d4"), vec![]);
    }

    #[test]
    fn test_king_captures_in_all_directions() {
        let board = board_with(&[
            (Color::Light, Rank::King, "d4"),
            (Color::Dark, Rank::Man, "c5"),
            (Color::Dark, Rank::Man, "e5"),
            (Color::Dark, Rank::Man, "c3"),
            (Color::Dark, Rank::Man, "e3"),
        ]);
        assert_moves(captures(&board, "d4"), vec!["d4xb2", "d4xb6", "d4xf2", "d4xf6"]);
    }

    #[test]
    fn test_no_flying_king_capture() {
        let board = board_with(&[(Color::Light, Rank::King, "a1"), (Color::Dark, Rank::Man, "c3")]);
        assert_moves(captures(&board, "a1"), vec![]);
    }

    #[test]
    fn test_generated_destinations_are_empty() {
        let board = DraughtsBoard::from_position("1d1d1d1d/d1d1d1d1/1d1d3d/4d3/3l4/l1l1l1l1/1l1l1l1l/l1l1l1l1 l").unwrap();
        for p in board.pieces() {
            for mv in board.legal_simple_moves(p, p.color) {
                assert_eq!(board.square(mv.to()), Square::Empty);
            }
            for capture in board.legal_captures(p, p.color) {
                assert_eq!(board.square(capture.to()), Square::Empty);
                assert_eq!(board.piece_at(capture.captured()).map(|c| c.color), Some(p.color.opposite()));
            }
        }
    }

    #[test]
    fn test_queries_are_pure() {
        let board = DraughtsBoard::from_position("8/8/3d4/4l3/8/8/8/8 l").unwrap();
        let before = board.clone();
        let p = piece(&board, "e5");
        assert_eq!(board.legal_simple_moves(&p, Color::Light), board.legal_simple_moves(&p, Color::Light));
        assert_eq!(board.legal_captures(&p, Color::Light), board.legal_captures(&p, Color::Light));
        assert!(matches!(board.classify_move(p.field, field("c7")), MoveType::CaptureMove(_)));
        let _ = board.game_outcome();
        assert_eq!(board, before);
    }

    #[test]
    fn test_classify_move() {
        let mut board = DraughtsBoard::initial();
        board.place_piece(Color::Dark, Rank::Man, field("b4")).unwrap();

        assert!(matches!(board.classify_move(field("a3"), field("c5")), MoveType::CaptureMove(_)));
        assert!(matches!(board.classify_move(field("c3"), field("d4")), MoveType::NormalMove(_)));
        assert_eq!(board.classify_move(field("c3"), field("c4")), MoveType::IllegalMove);
        assert_eq!(board.classify_move(field("a3"), field("b4")), MoveType::IllegalMove);
        // Empty source and opponent piece
        assert_eq!(board.classify_move(field("d4"), field("e5")), MoveType::IllegalMove);
        assert_eq!(board.classify_move(field("b6"), field("a5")), MoveType::IllegalMove);
    }

    #[test]
    fn test_classify_move_after_game_over() {
        let mut board = DraughtsBoard::initial();
        board.game_over = true;
        assert_eq!(board.classify_move(field("c3"), field("d4")), MoveType::IllegalMove);
        assert!(board.generate_legal_moves().is_empty());
    }

    #[test]
    fn test_classify_move_during_capture_chain() {
        let mut board = board_with(&[
            (Color::Light, Rank::Man, "c3"),
            (Color::Light, Rank::Man, "g3"),
            (Color::Dark, Rank::Man, "d4"),
            (Color::Dark, Rank::Man, "h4"),
        ]);
        board.capture_chain = Some(field("c3"));
        assert!(board.forced_capture_pending(field("c3")));
        assert!(!board.forced_capture_pending(field("g3")));

        assert_eq!(board.classify_move(field("c3"), field("b4")), MoveType::IllegalMove);
        assert_eq!(board.classify_move(field("g3"), field("f4")), MoveType::IllegalMove);
        assert!(matches!(board.classify_move(field("c3"), field("e5")), MoveType::CaptureMove(_)));

        let moves: Vec<String> = board.generate_legal_moves().iter().map(|m| m.as_algebraic()).collect();
        assert_moves(moves, vec!["c3xe5"]);
    }

    #[test]
    fn test_game_over_by_elimination() {
        let board = board_with(&[(Color::Light, Rank::Man, "d4")]);
        assert_eq!(board.game_outcome(), GameOutcome::Won(Color::Light));

        let board = board_with(&[(Color::Dark, Rank::Man, "d4")]);
        assert_eq!(board.game_outcome(), GameOutcome::Won(Color::Dark));

        assert_eq!(DraughtsBoard::new().game_outcome(), GameOutcome::Won(Color::Light));
    }

    #[test]
    fn test_game_over_by_blockade() {
        // Dark man on h4 runs into g3, and f2 behind it stops the jump
        let board = board_with(&[
            (Color::Dark, Rank::Man, "h4"),
            (Color::Light, Rank::Man, "g3"),
            (Color::Light, Rank::Man, "f2"),
        ]);
        let dark = piece(&board, "h4");
        assert!(board.legal_simple_moves(&dark, Color::Dark).is_empty());
        assert!(board.legal_captures(&dark, Color::Dark).is_empty());
        assert_eq!(board.game_outcome(), GameOutcome::Won(Color::Light));

        // Light king on a1 surrounded by a dark man on b2 backed by c3
        let board = board_with(&[
            (Color::Light, Rank::King, "a1"),
            (Color::Dark, Rank::Man, "b2"),
            (Color::Dark, Rank::Man, "c3"),
        ]);
        let king = piece(&board, "a1");
        assert!(board.legal_simple_moves(&king, Color::Light).is_empty());
        assert!(board.legal_captures(&king, Color::Light).is_empty());
        assert_eq!(board.game_outcome().winner(), Some(Color::Dark));
        assert!(board.is_game_over());
    }

    #[test]
    fn test_game_continues_when_both_can_move() {
        assert_eq!(DraughtsBoard::initial().game_outcome(), GameOutcome::Ongoing);
        assert_eq!(DraughtsBoard::initial().game_outcome().winner(), None);
        assert!(!DraughtsBoard::initial().is_game_over());
    }
}
