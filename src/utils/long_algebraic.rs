//! Coordinate move notation (`e2e4`) against a legal move list.
//!
//! The engine never re-validates in `make_move`, so drivers turn user or
//! script input into a `Move` by matching it against `get_valid_moves`.

use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::Move;
use crate::utils::algebraic::algebraic_to_square;

/// Find the legal move written as `notation` (start square then end square).
pub fn find_move_by_notation(valid_moves: &[Move], notation: &str) -> ChessResult<Move> {
    let text = notation.trim();
    if text.len() != 4 || !text.is_ascii() {
        return Err(ChessError::InvalidMoveNotation {
            text: notation.to_owned(),
        });
    }

    let invalid = |_| ChessError::InvalidMoveNotation {
        text: notation.to_owned(),
    };
    let start = algebraic_to_square(&text[0..2]).map_err(invalid)?;
    let end = algebraic_to_square(&text[2..4]).map_err(invalid)?;

    valid_moves
        .iter()
        .find(|mv| mv.start == start && mv.end == end)
        .copied()
        .ok_or_else(|| ChessError::IllegalMove {
            notation: text.to_owned(),
        })
}
