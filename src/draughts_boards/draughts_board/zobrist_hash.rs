use super::{Color, DraughtsBoard, Field, Piece, Rank, Square, BOARD_SIZE};
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use std::sync::Arc;

pub struct ZobristHash {
    piece_keys: [[[u64; BOARD_SIZE * BOARD_SIZE]; 2]; 2],
    side_to_move_key: u64,
    capture_chain_keys: [u64; BOARD_SIZE * BOARD_SIZE],
}

fn square_index(field: Field) -> usize {
    field.row as usize * BOARD_SIZE + field.col as usize
}

impl ZobristHash {
    fn new(seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);

        // Random numbers for pieces on squares
        let mut piece_keys = [[[0; BOARD_SIZE * BOARD_SIZE]; 2]; 2];
        for color_keys in &mut piece_keys {
            for rank_keys in color_keys {
                for square_key in rank_keys {
                    *square_key = rng.gen();
                }
            }
        }

        let side_to_move_key = rng.gen();

        // The piece that has to keep capturing is part of the position
        let mut capture_chain_keys = [0; BOARD_SIZE * BOARD_SIZE];
        for key in &mut capture_chain_keys {
            *key = rng.gen();
        }

        ZobristHash {
            piece_keys,
            side_to_move_key,
            capture_chain_keys,
        }
    }

    pub fn calculate_hash(&self, board: &DraughtsBoard) -> u64 {
        let mut hash = 0;

        for row in board.squares.iter() {
            for square in row.iter() {
                if let Square::Occupied(piece) = square {
                    hash = self.update_piece(hash, piece);
                }
            }
        }

        if board.current_player == Color::Dark {
            hash ^= self.side_to_move_key;
        }

        self.update_capture_chain(hash, board.capture_chain)
    }

    /// Toggles `piece` on its current field in or out of the hash.
    pub fn update_piece(&self, hash: u64, piece: &Piece) -> u64 {
        let rank_index = match piece.rank {
            Rank::Man => 0,
            Rank::King => 1,
        };
        hash ^ self.piece_keys[piece.color.index()][rank_index][square_index(piece.field)]
    }

    pub fn update_active_side(&self, hash: u64) -> u64 {
        hash ^ self.side_to_move_key
    }

    pub fn update_capture_chain(&self, hash: u64, capture_chain: Option<Field>) -> u64 {
        match capture_chain {
            Some(field) => hash ^ self.capture_chain_keys[square_index(field)],
            None => hash,
        }
    }
}

lazy_static! {
    pub static ref ZOBRIST: Arc<ZobristHash> = Arc::new(ZobristHash::new(42));
}
