//! Two-ply minimax move selection.
//!
//! For each candidate the opponent's best reply is scored with the material
//! evaluator; the candidate that leaves the opponent the least is chosen.
//! Candidates are shuffled first, so ties fall to whichever comes first in the
//! shuffled order. The random source is supplied by the caller.

use log::{debug, trace};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::move_generation::move_guard::MoveGuard;
use crate::moves::chess_move::Move;
use crate::search::board_scoring::{score_position, turn_multiplier, CHECKMATE, STALEMATE};

/// Uniformly random pick; `None` only for an empty list.
pub fn find_random_move<R: Rng + ?Sized>(valid_moves: &[Move], rng: &mut R) -> Option<Move> {
    valid_moves.choose(rng).copied()
}

/// Best move for the side to move by two-ply minimax.
///
/// `valid_moves` is shuffled in place. The state is restored before
/// returning, including the checkmate/stalemate flags. Returns `None` only
/// when `valid_moves` is empty.
pub fn find_best_move<R: Rng + ?Sized>(
    game_state: &mut GameState,
    valid_moves: &mut [Move],
    rng: &mut R,
) -> Option<Move> {
    let flags = (game_state.checkmate, game_state.stalemate);
    let multiplier = turn_multiplier(game_state.side_to_move);

    valid_moves.shuffle(rng);

    let mut best_move: Option<Move> = None;
    let mut opponent_min_max = CHECKMATE;

    for &player_move in valid_moves.iter() {
        let opponent_max = {
            let mut after_move = MoveGuard::new(game_state, player_move);
            best_reply_score(&mut after_move, multiplier)
        };
        trace!("candidate {player_move} opponent_best {opponent_max}");

        if best_move.is_none() || opponent_max < opponent_min_max {
            opponent_min_max = opponent_max;
            best_move = Some(player_move);
        }
    }

    (game_state.checkmate, game_state.stalemate) = flags;

    if let Some(mv) = best_move {
        debug!(
            "minimax picked {mv} from {} candidates, opponent best {opponent_min_max}",
            valid_moves.len()
        );
    }
    best_move
}

/// Opponent's best achievable score, in the opponent's perspective, with the
/// opponent to move.
fn best_reply_score(game_state: &mut GameState, multiplier: i32) -> i32 {
    let replies = get_valid_moves(game_state);
    if replies.is_empty() {
        return if game_state.checkmate {
            -CHECKMATE
        } else {
            STALEMATE
        };
    }

    let mut opponent_max = -CHECKMATE;
    for reply in replies {
        let mut after_reply = MoveGuard::new(game_state, reply);
        let score = -multiplier * score_position(&mut after_reply);
        opponent_max = opponent_max.max(score);
    }
    opponent_max
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{find_best_move, find_random_move};
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::get_valid_moves;

    #[test]
    fn random_move_is_drawn_from_the_list() {
        let mut game = GameState::new_game();
        let moves = get_valid_moves(&mut game);
        let mut rng = StdRng::seed_from_u64(7);
        let picked = find_random_move(&moves, &mut rng).expect("list is not empty");
        assert!(moves.contains(&picked));
        assert!(find_random_move(&[], &mut rng).is_none());
    }

    #[test]
    fn empty_candidate_list_yields_none() {
        let mut game = GameState::new_game();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(find_best_move(&mut game, &mut [], &mut rng).is_none());
    }

    #[test]
    fn takes_a_hanging_queen() {
        let mut game = GameState::from_diagram(
            [
                "....k...", "........", "........", "...q....", "........", "........",
                "........", "...RK...",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut moves = get_valid_moves(&mut game);
        let mut rng = StdRng::seed_from_u64(3);
        let best = find_best_move(&mut game, &mut moves, &mut rng).expect("white has moves");
        assert_eq!(best.notation(), "d1d5");
    }

    #[test]
    fn delivers_mate_in_one() {
        // Back-rank mate: Ra1-a8.
        let mut game = GameState::from_diagram(
            [
                "......k.", ".....ppp", "........", "........", "........", "........",
                "........", "R.....K.",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let mut moves = get_valid_moves(&mut game);
        let mut rng = StdRng::seed_from_u64(11);
        let best = find_best_move(&mut game, &mut moves, &mut rng).expect("white has moves");
        assert_eq!(best.notation(), "a1a8");
    }

    #[test]
    fn search_leaves_the_state_untouched() {
        let mut game = GameState::new_game();
        let mut moves = get_valid_moves(&mut game);
        let before = game.clone();
        let mut rng = StdRng::seed_from_u64(5);
        find_best_move(&mut game, &mut moves, &mut rng).expect("startpos has moves");
        assert_eq!(game, before);
    }

    #[test]
    fn same_seed_same_choice() {
        let pick = |seed: u64| {
            let mut game = GameState::new_game();
            let mut moves = get_valid_moves(&mut game);
            let mut rng = StdRng::seed_from_u64(seed);
            find_best_move(&mut game, &mut moves, &mut rng).expect("startpos has moves")
        };
        assert_eq!(pick(42), pick(42));
    }
}
