//! Queen moves: union of the rook and bishop rays.

use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

pub fn generate_queen_moves(game_state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_rook_moves(game_state, from, out);
    generate_bishop_moves(game_state, from, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    #[test]
    fn queen_in_the_centre_of_an_empty_board() {
        let game = GameState::from_diagram(
            [
                "k.......", "........", "........", "........", "...Q....", "........",
                "........", ".K......",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut out = Vec::new();
        generate_queen_moves(&game, Square::new(4, 3), &mut out);
        // 14 orthogonal + 13 diagonal squares from d4.
        assert_eq!(out.len(), 27);
    }
}
