//! Scoped make/undo for simulations.
//!
//! Legality filtering and search try moves on the one shared `GameState`.
//! `MoveGuard` applies a move on construction and undoes it on drop, so every
//! simulated move is reverted on every exit path, including `break`, `?` and
//! early `return`.

use std::ops::{Deref, DerefMut};

use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

pub struct MoveGuard<'a> {
    game_state: &'a mut GameState,
}

impl<'a> MoveGuard<'a> {
    pub fn new(game_state: &'a mut GameState, mv: Move) -> Self {
        game_state.make_move(mv);
        Self { game_state }
    }
}

impl Deref for MoveGuard<'_> {
    type Target = GameState;

    fn deref(&self) -> &GameState {
        self.game_state
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut GameState {
        self.game_state
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.game_state.undo_move();
    }
}
