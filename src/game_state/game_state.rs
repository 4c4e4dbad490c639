//! Authoritative game state with reversible make/undo.
//!
//! `GameState` is the central model for the engine. It owns the 8x8 board,
//! the side to move, cached king squares, and the history stacks that let
//! `undo_move` restore every transient field exactly. Move generation and
//! search borrow a single instance mutably and must leave it as they found it.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::castling_rights::CastlingRights;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_ROOK_COL, STARTING_POSITION_DIAGRAM,
};
use crate::game_state::chess_types::*;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,

    white_king: Square,
    black_king: Square,

    // --- Transient state and its history ---
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
    move_log: Vec<Move>,
    castling_rights_log: Vec<CastlingRights>,
    en_passant_log: Vec<Option<Square>>,

    // --- Set by the legal move generator ---
    pub checkmate: bool,
    pub stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_diagram(STARTING_POSITION_DIAGRAM, Color::White)
            .expect("starting diagram should always parse")
    }

    /// Return to the standard opening position, discarding all history.
    pub fn reset(&mut self) {
        *self = Self::new_game();
    }

    /// Build a position from eight rank strings, rank 8 first.
    ///
    /// Letters follow the usual convention (`KQRBNP` for White, lowercase for
    /// Black); `.` marks an empty square. A castling right is granted when the
    /// king and the matching rook both stand on their home squares.
    pub fn from_diagram(rows: [&str; 8], side_to_move: Color) -> ChessResult<Self> {
        let mut board: Board = [[None; 8]; 8];
        let mut white_kings = Vec::new();
        let mut black_kings = Vec::new();

        for (row, text) in rows.iter().enumerate() {
            let cells: Vec<char> = text.chars().collect();
            if cells.len() != 8 {
                return Err(ChessError::InvalidDiagram {
                    message: format!("row {row} has {} squares, expected 8", cells.len()),
                });
            }

            for (col, cell) in cells.into_iter().enumerate() {
                if cell == '.' {
                    continue;
                }
                let piece = Piece::from_char(cell).ok_or_else(|| ChessError::InvalidDiagram {
                    message: format!("unknown piece letter {cell:?} in row {row}"),
                })?;
                let square = Square::new(row as u8, col as u8);
                if piece.kind == PieceKind::King {
                    match piece.color {
                        Color::White => white_kings.push(square),
                        Color::Black => black_kings.push(square),
                    }
                }
                board[row][col] = Some(piece);
            }
        }

        let (white_king, black_king) = match (white_kings.as_slice(), black_kings.as_slice()) {
            ([w], [b]) => (*w, *b),
            _ => {
                return Err(ChessError::InvalidDiagram {
                    message: format!(
                        "expected one king per side, found {} white and {} black",
                        white_kings.len(),
                        black_kings.len()
                    ),
                })
            }
        };

        let castling_rights = derive_castling_rights(&board);

        Ok(Self {
            board,
            side_to_move,
            white_king,
            black_king,
            castling_rights,
            en_passant_target: None,
            move_log: Vec::new(),
            castling_rights_log: vec![castling_rights],
            en_passant_log: vec![None],
            checkmate: false,
            stalemate: false,
        })
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn castling_rights_log(&self) -> &[CastlingRights] {
        &self.castling_rights_log
    }

    #[inline]
    pub fn en_passant_log(&self) -> &[Option<Square>] {
        &self.en_passant_log
    }

    #[inline]
    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /// Apply `mv` without validating it. Callers pick moves from
    /// `get_valid_moves`.
    pub fn make_move(&mut self, mv: Move) {
        let mover = mv.mover();

        self.set(mv.start, None);
        self.set(mv.end, Some(mv.piece_moved));
        self.move_log.push(mv);

        if mv.piece_moved.kind == PieceKind::King {
            match mover {
                Color::White => self.white_king = mv.end,
                Color::Black => self.black_king = mv.end,
            }
        }

        // Only queen promotion is supported.
        if mv.is_promotion {
            self.set(mv.end, Some(Piece::new(mover, PieceKind::Queen)));
        }

        if mv.is_en_passant {
            self.set(Square::new(mv.start.row, mv.end.col), None);
        }

        self.en_passant_target = if mv.is_double_pawn_push() {
            Some(Square::new((mv.start.row + mv.end.row) / 2, mv.start.col))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant_target);

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_from);
            self.set(rook_to, rook);
            self.set(rook_from, None);
        }

        self.update_castling_rights(&mv);
        self.castling_rights_log.push(self.castling_rights);

        self.side_to_move = self.side_to_move.opposite();
    }

    /// Revert the most recent move. Returns `None` (and changes nothing) when
    /// the log is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.set(mv.start, Some(mv.piece_moved));
        self.set(mv.end, mv.piece_captured);
        self.side_to_move = self.side_to_move.opposite();

        if mv.piece_moved.kind == PieceKind::King {
            match mv.mover() {
                Color::White => self.white_king = mv.start,
                Color::Black => self.black_king = mv.start,
            }
        }

        if mv.is_en_passant {
            self.set(mv.end, None);
            self.set(Square::new(mv.start.row, mv.end.col), mv.piece_captured);
        }

        self.en_passant_log.pop();
        self.en_passant_target = self.en_passant_log.last().copied().flatten();

        self.castling_rights_log.pop();
        if let Some(&rights) = self.castling_rights_log.last() {
            self.castling_rights = rights;
        }

        if mv.is_castle {
            let (rook_from, rook_to) = castle_rook_squares(&mv);
            let rook = self.piece_at(rook_to);
            self.set(rook_from, rook);
            self.set(rook_to, None);
        }

        Some(mv)
    }

    fn update_castling_rights(&mut self, mv: &Move) {
        let mover = mv.mover();
        match mv.piece_moved.kind {
            PieceKind::King => self.castling_rights.revoke_all(mover),
            PieceKind::Rook if mv.start.row == mover.back_row() => match mv.start.col {
                QUEENSIDE_ROOK_COL => self.castling_rights.revoke_queenside(mover),
                KINGSIDE_ROOK_COL => self.castling_rights.revoke_kingside(mover),
                _ => {}
            },
            _ => {}
        }

        // A rook captured on its home corner takes its right with it.
        if let Some(captured) = mv.piece_captured {
            if captured.kind == PieceKind::Rook && mv.end.row == captured.color.back_row() {
                match mv.end.col {
                    QUEENSIDE_ROOK_COL => self.castling_rights.revoke_queenside(captured.color),
                    KINGSIDE_ROOK_COL => self.castling_rights.revoke_kingside(captured.color),
                    _ => {}
                }
            }
        }
    }
}

/// Rook origin and destination for a castling move.
fn castle_rook_squares(mv: &Move) -> (Square, Square) {
    let row = mv.end.row;
    if mv.end.col > mv.start.col {
        (
            Square::new(row, KINGSIDE_ROOK_COL),
            Square::new(row, mv.end.col - 1),
        )
    } else {
        (
            Square::new(row, QUEENSIDE_ROOK_COL),
            Square::new(row, mv.end.col + 1),
        )
    }
}

fn derive_castling_rights(board: &Board) -> CastlingRights {
    let holds = |color: Color, col: u8, kind: PieceKind| {
        board[color.back_row() as usize][col as usize] == Some(Piece::new(color, kind))
    };

    let mut rights = CastlingRights::none();
    for color in [Color::White, Color::Black] {
        if !holds(color, KING_HOME_COL, PieceKind::King) {
            continue;
        }
        let kingside = holds(color, KINGSIDE_ROOK_COL, PieceKind::Rook);
        let queenside = holds(color, QUEENSIDE_ROOK_COL, PieceKind::Rook);
        match color {
            Color::White => {
                rights.white_kingside = kingside;
                rights.white_queenside = queenside;
            }
            Color::Black => {
                rights.black_kingside = kingside;
                rights.black_queenside = queenside;
            }
        }
    }
    rights
}
