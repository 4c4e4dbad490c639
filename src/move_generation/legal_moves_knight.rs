//! Knight jumps.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::{generate_offset_moves, KNIGHT_OFFSETS};
use crate::moves::chess_move::Move;

pub fn generate_knight_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_offset_moves(game_state, from, &KNIGHT_OFFSETS, out);
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let game = GameState::from_diagram(
            [
                "....k...", "........", "........", "........", "...N....", "........",
                "........", "....K...",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut out = Vec::new();
        generate_knight_moves(&game, Square::new(4, 3), &mut out);
        assert_eq!(out.len(), 8);
    }

    #[test]
    fn starting_knight_skips_allied_squares() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        generate_knight_moves(&game, Square::new(7, 1), &mut out);
        let notations: Vec<String> = out.iter().map(|m| m.notation()).collect();
        assert_eq!(notations.len(), 2);
        assert!(notations.contains(&"b1a3".to_owned()));
        assert!(notations.contains(&"b1c3".to_owned()));
    }
}
