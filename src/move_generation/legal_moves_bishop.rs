//! Bishop moves: diagonal rays.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_ray_moves, DIAGONAL_DIRECTIONS};
use crate::moves::chess_move::Move;

pub fn generate_bishop_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_ray_moves(game_state, from, &DIAGONAL_DIRECTIONS, out);
}
