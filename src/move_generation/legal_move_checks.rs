//! Check and attack queries.
//!
//! The attacker's color is passed explicitly, so probing never flips
//! `side_to_move` and never generates castling.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_pawn::pawn_attack_squares;
use crate::move_generation::move_generator::generate_piece_moves;

/// True if the king of the side to move is attacked.
#[inline]
pub fn in_check(game_state: &GameState) -> bool {
    is_king_in_check(game_state, game_state.side_to_move)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    square_under_attack(game_state, game_state.king_square(color), color.opposite())
}

/// True if any `attacker` piece could capture on `square`.
///
/// Built on the per-piece generators with castling left out, which also keeps
/// castling legality from recursing into itself. Pawns contribute their
/// diagonals rather than their pushes.
pub fn square_under_attack(game_state: &GameState, square: Square, attacker: Color) -> bool {
    let mut scratch = Vec::with_capacity(32);

    for from in Square::all() {
        let Some(piece) = game_state.piece_at(from) else {
            continue;
        };
        if piece.color != attacker {
            continue;
        }

        if piece.kind == PieceKind::Pawn {
            if pawn_attack_squares(attacker, from).any(|target| target == square) {
                return true;
            }
            continue;
        }

        scratch.clear();
        generate_piece_moves(game_state, from, piece.kind, &mut scratch);
        if scratch.iter().any(|mv| mv.end == square) {
            return true;
        }
    }

    false
}
