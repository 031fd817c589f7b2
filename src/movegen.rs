use crate::board::{Board, Color, Piece, Square};

/// A (source, destination) pair. Captures are implied by the destination's
/// contents at application time; there are no special move forms here (no
/// castling, en passant, or promotion in this rule set).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Whether moving the piece on `from` to `to` is legal for the side whose
/// turn it is. Out-of-range coordinates are simply illegal: `piece_at` reads
/// them as empty, and the explicit bounds check below keeps a pawn or king
/// from stepping off the edge onto a "vacant" ninth rank.
pub fn is_legal_move(board: &Board, turn: Color, from: Square, to: Square) -> bool {
    let (piece, color) = match board.piece_at(from) {
        Some(p) => p,
        None => return false,
    };
    if color != turn {
        return false;
    }
    if from == to {
        return false;
    }
    let target = board.piece_at(to);
    if let Some((_, target_color)) = target {
        if target_color == color {
            return false;
        }
    }
    if !to.in_bounds() {
        return false;
    }

    let dx = (to.file - from.file).abs();
    let dz = (to.rank - from.rank).abs();

    match piece {
        Piece::Pawn => {
            let direction = color.pawn_direction();
            // Forward one onto an empty square.
            if dx == 0 && to.rank - from.rank == direction && target.is_none() {
                return true;
            }
            // Forward two from the start rank, destination and the square
            // stepped over both empty.
            if dx == 0
                && from.rank == color.pawn_start_rank()
                && to.rank - from.rank == 2 * direction
                && target.is_none()
                && board
                    .piece_at(Square::new(from.file, from.rank + direction))
                    .is_none()
            {
                return true;
            }
            // Diagonal capture only; pawns never step diagonally onto an
            // empty square (no en passant).
            dx == 1 && to.rank - from.rank == direction && target.is_some()
        }
        Piece::Rook => {
            if dx != 0 && dz != 0 {
                return false;
            }
            path_clear(board, from, to)
        }
        Piece::Bishop => {
            if dx != dz {
                return false;
            }
            path_clear(board, from, to)
        }
        Piece::Queen => {
            if dx != dz && (dx != 0 && dz != 0) {
                return false;
            }
            path_clear(board, from, to)
        }
        Piece::Knight => (dx == 2 && dz == 1) || (dx == 1 && dz == 2),
        // One step any direction. The king is allowed to walk into an
        // attacked square; this rule set has no notion of check.
        Piece::King => dx <= 1 && dz <= 1,
    }
}

/// Every square strictly between `from` and `to` is empty. Callers must have
/// already established that the pair is aligned on a rank, file, or diagonal.
fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dx = (to.file - from.file).signum();
    let dz = (to.rank - from.rank).signum();

    let mut sq = Square::new(from.file + dx, from.rank + dz);
    while sq != to {
        if board.piece_at(sq).is_some() {
            return false;
        }
        sq = Square::new(sq.file + dx, sq.rank + dz);
    }
    true
}

/// All legal moves for `side`'s pieces, judged against `turn`. The two only
/// differ when a caller enumerates for the side not on move, in which case
/// the ownership check rejects everything and the list comes back empty.
///
/// Order is deterministic: sources in row-major (rank, then file) order,
/// destinations nested in the same order.
pub fn legal_moves(board: &Board, turn: Color, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for from_rank in 0..8 {
        for from_file in 0..8 {
            let from = Square::new(from_file, from_rank);
            match board.piece_at(from) {
                Some((_, color)) if color == side => {}
                _ => continue,
            }
            for to_rank in 0..8 {
                for to_file in 0..8 {
                    let to = Square::new(to_file, to_rank);
                    if is_legal_move(board, turn, from, to) {
                        moves.push(Move::new(from, to));
                    }
                }
            }
        }
    }
    moves
}
