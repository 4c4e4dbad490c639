//! Immutable description of a single ply.
//!
//! A `Move` is captured from a board snapshot: the moved and captured pieces
//! are read off the board when the move is built, so the record carries
//! everything `undo_move` needs to restore the position.

use std::fmt;

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::utils::algebraic::square_to_algebraic;

/// Special-move kind supplied by the generator. Promotion is derived from the
/// destination rank instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveFlag {
    #[default]
    Normal,
    EnPassant,
    Castle,
}

#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_en_passant: bool,
    pub is_castle: bool,
    pub is_promotion: bool,
    move_id: u16,
}

impl Move {
    /// Build a move from the current board contents.
    ///
    /// Panics if `start` is empty; generators only call this for occupied
    /// squares.
    pub fn new(start: Square, end: Square, board: &Board, flag: MoveFlag) -> Self {
        let piece_moved = board[start.row as usize][start.col as usize]
            .unwrap_or_else(|| panic!("no piece on move origin {start:?}"));

        let is_en_passant = flag == MoveFlag::EnPassant;
        let piece_captured = if is_en_passant {
            Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn))
        } else {
            board[end.row as usize][end.col as usize]
        };

        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();

        let move_id = start.row as u16 * 1000
            + start.col as u16 * 100
            + end.row as u16 * 10
            + end.col as u16;

        Self {
            start,
            end,
            piece_moved,
            piece_captured,
            is_en_passant,
            is_castle: flag == MoveFlag::Castle,
            is_promotion,
            move_id,
        }
    }

    /// Identity used for equality: `start.row*1000 + start.col*100 + end.row*10 + end.col`.
    #[inline]
    pub fn id(&self) -> u16 {
        self.move_id
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.piece_moved.color
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && self.start.row.abs_diff(self.end.row) == 2
    }

    /// Start and end square codes concatenated, e.g. `e2e4`.
    pub fn notation(&self) -> String {
        format!(
            "{}{}",
            square_to_algebraic(self.start),
            square_to_algebraic(self.end)
        )
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id == other.move_id
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation())
    }
}
