//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal moves (plus castling), tries each on the shared
//! state through a `MoveGuard`, and drops the ones that leave the mover's king
//! attacked. Also derives the checkmate/stalemate flags.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::{in_check, is_king_in_check};
use crate::move_generation::legal_moves_king::generate_castle_moves;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::move_generation::move_guard::MoveGuard;
use crate::moves::chess_move::Move;

/// Legal moves for the side to move. Updates `checkmate` and `stalemate`.
pub fn get_valid_moves(game_state: &mut GameState) -> Vec<Move> {
    let saved_en_passant = game_state.en_passant_target;
    let saved_castling = game_state.castling_rights;

    let pseudo = generate_candidates(game_state);
    let mut legal = Vec::with_capacity(pseudo.len());
    for mv in pseudo {
        if leaves_king_safe(game_state, mv) {
            legal.push(mv);
        }
    }

    game_state.en_passant_target = saved_en_passant;
    game_state.castling_rights = saved_castling;

    if legal.is_empty() {
        let checked = in_check(game_state);
        game_state.checkmate = checked;
        game_state.stalemate = !checked;
    } else {
        game_state.checkmate = false;
        game_state.stalemate = false;
    }

    legal
}

/// True if the side to move has at least one legal move. Leaves the
/// checkmate/stalemate flags alone.
pub fn has_valid_move(game_state: &mut GameState) -> bool {
    let pseudo = generate_candidates(game_state);
    pseudo.into_iter().any(|mv| leaves_king_safe(game_state, mv))
}

fn generate_candidates(game_state: &GameState) -> Vec<Move> {
    let side = game_state.side_to_move;
    let mut pseudo = Vec::with_capacity(64);
    generate_pseudo_legal_moves(game_state, side, &mut pseudo);
    generate_castle_moves(game_state, game_state.king_square(side), &mut pseudo);
    pseudo
}

fn leaves_king_safe(game_state: &mut GameState, mv: Move) -> bool {
    let mover = mv.mover();
    let guard = MoveGuard::new(game_state, mv);
    !is_king_in_check(&guard, mover)
}
