//! Two-ply minimax engine with a random fallback.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::search::minimax::{find_best_move, find_random_move};

pub struct MinimaxEngine {
    rng: StdRng,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "minimax"
    }

    fn choose_move(&mut self, game_state: &mut GameState) -> ChessResult<EngineOutput> {
        let mut legal_moves = get_valid_moves(game_state);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("minimax_engine legal_moves {}", legal_moves.len()));

        if legal_moves.is_empty() {
            return Ok(out);
        }

        out.best_move = find_best_move(game_state, &mut legal_moves, &mut self.rng)
            .or_else(|| find_random_move(&legal_moves, &mut self.rng));
        Ok(out)
    }
}
