//! Material evaluation.
//!
//! Scores are from White's point of view: positive favors White.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::in_check;
use crate::move_generation::legal_move_generator::has_valid_move;

pub const CHECKMATE: i32 = 1000;
pub const STALEMATE: i32 = 0;

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King => 0,
    }
}

/// +1 for White, -1 for Black.
#[inline]
pub const fn turn_multiplier(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

pub fn score_material(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .flatten()
        .map(|piece| turn_multiplier(piece.color) * piece_value(piece.kind))
        .sum()
}

/// White-positive score of the position, mate and stalemate included.
pub fn score_position(game_state: &mut GameState) -> i32 {
    if has_valid_move(game_state) {
        return score_material(&game_state.board);
    }

    if in_check(game_state) {
        // The side to move is mated.
        -turn_multiplier(game_state.side_to_move) * CHECKMATE
    } else {
        STALEMATE
    }
}
