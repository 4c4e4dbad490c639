//! King steps and castling.
//!
//! Castling needs the matching right and an empty path to the rook. The king
//! may not start on, pass over, or land on an attacked square.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::square_under_attack;
use crate::move_generation::legal_move_shared::{generate_offset_moves, mover_color, KING_OFFSETS};
use crate::moves::chess_move::{Move, MoveFlag};

/// Adjacent king steps. Castling is generated separately by
/// [`generate_castle_moves`] so the attack probe can skip it.
pub fn generate_king_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_offset_moves(game_state, from, &KING_OFFSETS, out);
}

pub fn generate_castle_moves(game_state: &GameState, king_from: Square, out: &mut Vec<Move>) {
    let side = mover_color(game_state, king_from);
    let enemy = side.opposite();

    // Cannot castle out of check.
    if square_under_attack(game_state, king_from, enemy) {
        return;
    }

    if game_state.castling_rights.kingside(side) {
        let path = [king_from.offset(0, 1), king_from.offset(0, 2)];
        if let [Some(f), Some(g)] = path {
            if game_state.piece_at(f).is_none()
                && game_state.piece_at(g).is_none()
                && !square_under_attack(game_state, f, enemy)
                && !square_under_attack(game_state, g, enemy)
            {
                out.push(Move::new(king_from, g, &game_state.board, MoveFlag::Castle));
            }
        }
    }

    if game_state.castling_rights.queenside(side) {
        let path = [
            king_from.offset(0, -1),
            king_from.offset(0, -2),
            king_from.offset(0, -3),
        ];
        if let [Some(d), Some(c), Some(b)] = path {
            if game_state.piece_at(d).is_none()
                && game_state.piece_at(c).is_none()
                && game_state.piece_at(b).is_none()
                && !square_under_attack(game_state, d, enemy)
                && !square_under_attack(game_state, c, enemy)
            {
                out.push(Move::new(king_from, c, &game_state.board, MoveFlag::Castle));
            }
        }
    }
}
