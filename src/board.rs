use std::fmt;

use crate::game::StateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// Letter used in board printouts and saved snapshots (uppercase form).
    pub fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'P',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Rook => 'R',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            'P' => Some(Piece::Pawn),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'R' => Some(Piece::Rook),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color advances along the rank axis.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank this color's pawns start on, for double-step eligibility.
    pub fn pawn_start_rank(&self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

/// A board coordinate. Signed so that callers may form off-board coordinates
/// (path tracing, pawn double-step targets) and get a lenient "no piece"
/// answer instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    pub fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    pub fn in_bounds(&self) -> bool {
        (0..8).contains(&self.file) && (0..8).contains(&self.rank)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.in_bounds() {
            return write!(f, "({},{})", self.file, self.rank);
        }
        write!(
            f,
            "{}{}",
            (b'a' + self.file as u8) as char,
            (b'1' + self.rank as u8) as char
        )
    }
}

const BACK_ROW: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// 8×8 mailbox of optional (piece, color) pairs, indexed [rank][file].
/// Rank 0 is White's back rank, rank 7 Black's. The grid itself is private:
/// every read goes through `piece_at` and every write through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<(Piece, Color)>; 8]; 8],
}

impl Board {
    /// Standard starting position.
    pub fn new() -> Self {
        let mut squares = [[None; 8]; 8];
        for (file, &piece) in BACK_ROW.iter().enumerate() {
            squares[0][file] = Some((piece, Color::White));
            squares[7][file] = Some((piece, Color::Black));
        }
        for file in 0..8 {
            squares[1][file] = Some((Piece::Pawn, Color::White));
            squares[6][file] = Some((Piece::Pawn, Color::Black));
        }
        Board { squares }
    }

    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Piece occupying `sq`, or `None` for empty cells and for any
    /// out-of-range coordinate. Never errors; the rule checks lean on this.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        if !sq.in_bounds() {
            return None;
        }
        self.squares[sq.rank as usize][sq.file as usize]
    }

    pub(crate) fn set(&mut self, sq: Square, contents: Option<(Piece, Color)>) {
        debug_assert!(sq.in_bounds());
        self.squares[sq.rank as usize][sq.file as usize] = contents;
    }

    /// FEN-style placement field: rank 7 first, ranks separated by `/`,
    /// digits for runs of empty squares, uppercase for White.
    pub fn placement(&self) -> String {
        let mut result = String::new();
        for rank in (0..8).rev() {
            let mut empty_run = 0;
            for file in 0..8 {
                match self.squares[rank][file] {
                    Some((piece, color)) => {
                        if empty_run > 0 {
                            result.push(char::from_digit(empty_run, 10).unwrap());
                            empty_run = 0;
                        }
                        let c = piece.to_char();
                        result.push(match color {
                            Color::White => c,
                            Color::Black => c.to_ascii_lowercase(),
                        });
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                result.push(char::from_digit(empty_run, 10).unwrap());
            }
            if rank > 0 {
                result.push('/');
            }
        }
        result
    }

    pub fn from_placement(placement: &str) -> Result<Self, StateError> {
        let mut board = Board::empty();
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(StateError::BadPlacement(placement.to_string()));
        }
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i as i8;
            let mut file: i8 = 0;
            for c in row.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as i8;
                } else {
                    let piece = Piece::from_char(c).ok_or(StateError::BadPieceChar(c))?;
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    if file >= 8 {
                        return Err(StateError::BadPlacement(placement.to_string()));
                    }
                    board.set(Square::new(file, rank), Some((piece, color)));
                    file += 1;
                }
            }
            if file != 8 {
                return Err(StateError::BadPlacement(placement.to_string()));
            }
        }
        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for rank in (0..8).rev() {
            for file in 0..8 {
                let c = match self.squares[rank][file] {
                    Some((piece, Color::White)) => piece.to_char(),
                    Some((piece, Color::Black)) => piece.to_char().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{}", c)?;
                if file < 7 {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
