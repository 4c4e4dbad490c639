//! Minimal head-to-head engine match harness.
//!
//! Runs two `Engine` implementations against each other on a single
//! `GameState` without any UI, recording the moves played.

use log::{debug, info};

use crate::engines::engine_trait::Engine;
use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::moves::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            verbose: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub played_moves: Vec<String>,
}

/// Play from the standard opening. `engine_white` moves first.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(GameState::new_game(), engine_white, engine_black, config)
}

/// Play from a caller-provided position.
pub fn play_engine_match_from_state(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut played_moves = Vec::<String>::new();

    // One extra pass after the last allowed ply so a final mate or stalemate
    // is still reported as such.
    for ply in 0..=config.max_plies {
        let legal_moves = get_valid_moves(&mut state);
        if let Some(outcome) = terminal_outcome(&state, &legal_moves) {
            info!("game over after {ply} plies: {outcome:?}");
            return Ok(MatchResult {
                outcome,
                final_state: state,
                played_moves,
            });
        }
        if ply == config.max_plies {
            break;
        }

        let engine: &mut dyn Engine = match state.side_to_move {
            Color::White => &mut *engine_white,
            Color::Black => &mut *engine_black,
        };
        let out = engine.choose_move(&mut state)?;
        for line in &out.info_lines {
            debug!("{line}");
        }

        let mv = out.best_move.ok_or_else(|| ChessError::Engine {
            engine: engine.name().to_owned(),
            message: "no move returned in a position with legal moves".to_owned(),
        })?;
        if !legal_moves.contains(&mv) {
            return Err(ChessError::IllegalMove {
                notation: mv.notation(),
            });
        }

        if config.verbose {
            info!("ply {} {:?} {} plays {mv}", ply + 1, state.side_to_move, engine.name());
        }
        played_moves.push(mv.notation());
        state.make_move(mv);
    }

    info!("game stopped at the {} ply limit", config.max_plies);
    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_state: state,
        played_moves,
    })
}

/// Outcome of a position whose legal moves were just generated, if the game is over.
fn terminal_outcome(state: &GameState, legal_moves: &[Move]) -> Option<MatchOutcome> {
    if !legal_moves.is_empty() {
        return None;
    }
    Some(if state.checkmate {
        match state.side_to_move {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }
    } else {
        MatchOutcome::DrawStalemate
    })
}

#[cfg(test)]
mod tests {
    use super::{play_engine_match, play_engine_match_from_state, MatchConfig, MatchOutcome};
    use crate::engines::engine_trait::{Engine, EngineOutput};
    use crate::errors::ChessResult;
    use crate::moves::chess_move::Move;
    use crate::engines::engine_minimax::MinimaxEngine;
    use crate::engines::engine_random::RandomEngine;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn random_match_respects_the_ply_limit() {
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let config = MatchConfig {
            max_plies: 12,
            ..MatchConfig::default()
        };
        let result =
            play_engine_match(&mut white, &mut black, &config).expect("match should run");
        assert!(result.played_moves.len() <= 12);
        assert_eq!(
            result.final_state.move_log().len(),
            result.played_moves.len()
        );
        let finished = result.final_state.checkmate || result.final_state.stalemate;
        if result.played_moves.len() == 12 && !finished {
            assert_eq!(result.outcome, MatchOutcome::DrawMaxPlies);
        }
    }

    #[test]
    fn minimax_converts_a_mate_in_one() {
        let start = GameState::from_diagram(
            [
                "......k.", ".....ppp", "........", "........", "........", "........",
                "........", "R.....K.",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut white = MinimaxEngine::with_seed(4);
        let mut black = RandomEngine::with_seed(4);
        let result = play_engine_match_from_state(
            start,
            &mut white,
            &mut black,
            &MatchConfig {
                max_plies: 4,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.played_moves, vec!["a1a8"]);
    }

    #[test]
    fn mate_on_the_last_allowed_ply_is_reported_as_a_win() {
        let start = GameState::from_diagram(
            [
                "......k.", ".....ppp", "........", "........", "........", "........",
                "........", "R.....K.",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut white = MinimaxEngine::with_seed(4);
        let mut black = RandomEngine::with_seed(4);
        let result = play_engine_match_from_state(
            start,
            &mut white,
            &mut black,
            &MatchConfig {
                max_plies: 1,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert_eq!(result.played_moves, vec!["a1a8"]);
        assert!(result.final_state.checkmate);
    }

    #[test]
    fn stalemate_on_the_last_allowed_ply_is_reported_as_a_draw() {
        // Qb5-b6 leaves the a8 king with no moves and no check.
        let start = GameState::from_diagram(
            [
                "k.......", "........", "..K.....", ".Q......", "........", "........",
                "........", "........",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut state = start.clone();
        let moves = crate::move_generation::legal_move_generator::get_valid_moves(&mut state);
        let stalemating = crate::utils::long_algebraic::find_move_by_notation(&moves, "b5b6")
            .expect("b5b6 is legal");
        let mut white = ScriptedEngine(Some(stalemating));
        let mut black = RandomEngine::with_seed(1);
        let result = play_engine_match_from_state(
            start,
            &mut white,
            &mut black,
            &MatchConfig {
                max_plies: 1,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::DrawStalemate);
        assert_eq!(result.played_moves, vec!["b5b6"]);
    }

    #[test]
    fn zero_ply_limit_still_detects_a_finished_position() {
        let start = GameState::from_diagram(
            [
                "R.....k.", ".....ppp", "........", "........", "........", "........",
                "........", "......K.",
            ],
            Color::Black,
        )
        .expect("diagram should parse");
        let mut white = RandomEngine::with_seed(1);
        let mut black = RandomEngine::with_seed(2);
        let result = play_engine_match_from_state(
            start,
            &mut white,
            &mut black,
            &MatchConfig {
                max_plies: 0,
                ..MatchConfig::default()
            },
        )
        .expect("match should run");
        assert_eq!(result.outcome, MatchOutcome::WhiteWinCheckmate);
        assert!(result.played_moves.is_empty());
    }

    /// Plays one fixed move, then nothing.
    struct ScriptedEngine(Option<Move>);

    impl Engine for ScriptedEngine {
        fn name(&self) -> &str {
            "scripted"
        }

        fn choose_move(&mut self, _game_state: &mut GameState) -> ChessResult<EngineOutput> {
            Ok(EngineOutput {
                best_move: self.0.take(),
                info_lines: Vec::new(),
            })
        }
    }
}
