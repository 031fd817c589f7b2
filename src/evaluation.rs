use crate::board::{Board, Piece, Square};
use crate::movegen::Move;

pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 10,
        Piece::Knight => 30,
        Piece::Bishop => 30,
        Piece::Rook => 50,
        Piece::Queen => 90,
        Piece::King => 900,
    }
}

/// The four central squares (d4, e4, d5, e5) earn a small occupancy bonus.
fn is_center(sq: Square) -> bool {
    (3..=4).contains(&sq.file) && (3..=4).contains(&sq.rank)
}

/// One-ply greedy score of a candidate move: the value of whatever sits on
/// the destination (0 for a quiet move), plus 1 for landing in the center.
/// No look-ahead of any kind.
pub fn score_move(board: &Board, mv: &Move) -> i32 {
    let mut score = board
        .piece_at(mv.to)
        .map(|(piece, _)| piece_value(piece))
        .unwrap_or(0);
    if is_center(mv.to) {
        score += 1;
    }
    score
}
