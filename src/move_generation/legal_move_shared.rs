//! Direction tables and the offset/ray walkers shared by the piece generators.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::chess_move::{Move, MoveFlag};

pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Color of the piece on `square`. Generators are only invoked on occupied
/// squares.
#[inline]
pub fn mover_color(game_state: &GameState, square: Square) -> Color {
    game_state
        .piece_at(square)
        .map(|piece| piece.color)
        .unwrap_or_else(|| panic!("move generation requested for empty square {square:?}"))
}

/// Emit a move for every offset that lands on the board and is not held by an
/// ally.
pub fn generate_offset_moves(
    game_state: &GameState,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let ally = mover_color(game_state, from);
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };
        match game_state.piece_at(to) {
            Some(piece) if piece.color == ally => {}
            _ => out.push(Move::new(from, to, &game_state.board, MoveFlag::Normal)),
        }
    }
}

/// Slide along each direction until the board edge or a blocker. Enemy
/// blockers are included as captures, friendly blockers are not.
pub fn generate_ray_moves(
    game_state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    let ally = mover_color(game_state, from);
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(to) = current.offset(d_row, d_col) {
            match game_state.piece_at(to) {
                None => out.push(Move::new(from, to, &game_state.board, MoveFlag::Normal)),
                Some(piece) => {
                    if piece.color != ally {
                        out.push(Move::new(from, to, &game_state.board, MoveFlag::Normal));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
