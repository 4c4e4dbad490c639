//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position used to initialize and reset game state.

/// Standard starting position, row 0 (rank 8) first. Uppercase is White.
pub const STARTING_POSITION_DIAGRAM: [&str; 8] = [
    "rnbqkbnr", "pppppppp", "........", "........", "........", "........", "PPPPPPPP",
    "RNBQKBNR",
];

/// Column of both kings in the starting position.
pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
