//! Engine abstraction layer used by the match harness and the CLI.
//!
//! Defines a common output payload so different move-selection strategies
//! can be picked at runtime behind a single trait interface.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. The state must be returned unchanged.
    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput>;
}
