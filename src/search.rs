use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::Color;
use crate::evaluation::score_move;
use crate::game::Game;
use crate::movegen::Move;

/// Pick and apply a move for `side` using the one-ply greedy heuristic.
///
/// The candidate list is shuffled uniformly before the scan, and the scan
/// keeps a move only on a strictly greater score, so the result is a uniform
/// pick among the maximal-scoring moves rather than a biased first match.
/// A move that scores below the maximum is never chosen.
///
/// Returns `None` when `side` has no legal moves; the caller decides what
/// end-of-game means (no checkmate/stalemate distinction exists here).
pub fn select_best_move<R: Rng>(game: &mut Game, side: Color, rng: &mut R) -> Option<Move> {
    let mut moves = game.legal_moves(side);
    if moves.is_empty() {
        debug!("no legal moves for {:?}", side);
        return None;
    }

    moves.shuffle(rng);

    let mut best_move = None;
    let mut max_score = i32::MIN;
    for mv in &moves {
        let score = score_move(game.board(), mv);
        if score > max_score {
            max_score = score;
            best_move = Some(*mv);
        }
    }

    // Applied through the same path as user moves, so the usual side effects
    // (history append, turn flip) hold.
    let best = best_move?;
    debug!("selected {} (score {})", best, max_score);
    if game.try_move(best.from, best.to) {
        Some(best)
    } else {
        None
    }
}
