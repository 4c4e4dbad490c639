//! Rook moves: orthogonal rays.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_ray_moves, ORTHOGONAL_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_rook_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(game_state, from, &ORTHOGONAL_DIRECTIONS, out);
}
