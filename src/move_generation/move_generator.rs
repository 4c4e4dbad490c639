//! Pseudo-legal move generation.
//!
//! Dispatches each occupied square to its per-piece rule. The output ignores
//! whether a move leaves the mover's own king attacked; the legal move
//! generator filters that in a separate pass.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::moves::chess_move::Move;

#[inline]
pub fn generate_piece_moves(
    game_state: &GameState,
    from: Square,
    kind: PieceKind,
    out: &mut Vec<Move>,
) {
    match kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, out),
        PieceKind::Knight => generate_knight_moves(game_state, from, out),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, out),
        PieceKind::Rook => generate_rook_moves(game_state, from, out),
        PieceKind::Queen => generate_queen_moves(game_state, from, out),
        PieceKind::King => generate_king_moves(game_state, from, out),
    }
}

/// Every pseudo-legal move for `side`, castling excluded.
pub fn generate_pseudo_legal_moves(game_state: &GameState, side: Color, out: &mut Vec<Move>) {
    for square in Square::all() {
        if let Some(piece) = game_state.piece_at(square) {
            if piece.color == side {
                generate_piece_moves(game_state, square, piece.kind, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pseudo_legal_moves;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_has_twenty_pseudo_legal_moves_each_side() {
        let game = GameState::new_game();
        for side in [Color::White, Color::Black] {
            let mut out = Vec::with_capacity(64);
            generate_pseudo_legal_moves(&game, side, &mut out);
            assert_eq!(out.len(), 20);
            assert!(out.iter().all(|m| m.mover() == side));
        }
    }
}
