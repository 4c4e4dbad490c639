//! Pawn pushes, captures, en passant and promotion flags.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::mover_color;
use crate::moves::chess_move::{Move, MoveFlag};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    let side = mover_color(game_state, from);
    let dir = side.pawn_direction();

    // Pushes.
    if let Some(one) = from.offset(dir, 0) {
        if game_state.piece_at(one).is_none() {
            out.push(Move::new(from, one, &game_state.board, MoveFlag::Normal));

            if from.row == side.pawn_start_row() {
                if let Some(two) = one.offset(dir, 0) {
                    if game_state.piece_at(two).is_none() {
                        out.push(Move::new(from, two, &game_state.board, MoveFlag::Normal));
                    }
                }
            }
        }
    }

    // Captures, including en passant onto the empty target square.
    for d_col in [-1, 1] {
        let Some(to) = from.offset(dir, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color != side => {
                out.push(Move::new(from, to, &game_state.board, MoveFlag::Normal));
            }
            None if game_state.en_passant_target == Some(to) => {
                out.push(Move::new(from, to, &game_state.board, MoveFlag::EnPassant));
            }
            _ => {}
        }
    }
}

/// Squares a pawn on `from` attacks, regardless of what stands there.
pub fn pawn_attack_squares(color: Color, from: Square) -> impl Iterator<Item = Square> {
    let dir = color.pawn_direction();
    [-1, 1]
        .into_iter()
        .filter_map(move |d_col| from.offset(dir, d_col))
}
