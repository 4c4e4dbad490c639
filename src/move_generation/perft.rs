//! Perft node counting over the make/undo pipeline.
//!
//! Used to cross-check move generation against published node counts.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::get_valid_moves;
use crate::move_generation::move_guard::MoveGuard;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }
}

/// Count leaf nodes `depth` plies below `game_state`. The state is left as
/// it was found, apart from the checkmate/stalemate flags which are restored.
pub fn perft(game_state: &mut GameState, depth: u8) -> PerftCounts {
    let flags = (game_state.checkmate, game_state.stalemate);
    let counts = perft_recurse(game_state, depth);
    (game_state.checkmate, game_state.stalemate) = flags;
    counts
}

fn perft_recurse(game_state: &mut GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let moves = get_valid_moves(game_state);
    let mut total = PerftCounts::default();

    if depth == 1 {
        for mv in &moves {
            total.nodes += 1;
            total.captures += usize::from(mv.is_capture());
            total.en_passant += usize::from(mv.is_en_passant);
            total.castles += usize::from(mv.is_castle);
            total.promotions += usize::from(mv.is_promotion);
        }
        return total;
    }

    for mv in moves {
        let mut guard = MoveGuard::new(game_state, mv);
        total.merge(perft_recurse(&mut guard, depth - 1));
    }
    total
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::Color;
    use crate::game_state::game_state::GameState;

    #[test]
    fn startpos_node_counts() {
        let mut game = GameState::new_game();
        let before = game.clone();
        assert_eq!(perft(&mut game, 1).nodes, 20);
        assert_eq!(perft(&mut game, 2).nodes, 400);
        let depth3 = perft(&mut game, 3);
        assert_eq!(depth3.nodes, 8902);
        assert_eq!(depth3.captures, 34);
        assert_eq!(game, before);
    }

    #[test]
    fn castling_rich_middlegame_node_counts() {
        // r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq -
        let mut game = GameState::from_diagram(
            [
                "r...k..r", "p.ppqpb.", "bn..pnp.", "...PN...", ".p..P...", "..N..Q.p",
                "PPPBBPPP", "R...K..R",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        let depth1 = perft(&mut game, 1);
        assert_eq!(depth1.nodes, 48);
        assert_eq!(depth1.captures, 8);
        assert_eq!(depth1.castles, 2);
        let depth2 = perft(&mut game, 2);
        assert_eq!(depth2.nodes, 2039);
        assert_eq!(depth2.captures, 351);
        assert_eq!(depth2.en_passant, 1);
        assert_eq!(depth2.castles, 91);
    }

    #[test]
    fn rook_endgame_node_counts() {
        // 8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -
        let mut game = GameState::from_diagram(
            [
                "........", "..p.....", "...p....", "KP.....r", ".R...p.k", "........",
                "....P.P.", "........",
            ],
            Color::White,
        )
        .expect("diagram should parse");
        assert_eq!(perft(&mut game, 1).nodes, 14);
        assert_eq!(perft(&mut game, 2).nodes, 191);
        assert_eq!(perft(&mut game, 3).nodes, 2812);
    }
}
