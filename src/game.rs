use log::debug;
use thiserror::Error;

use crate::board::{Board, Color, Piece, Square};
use crate::movegen::{self, Move};
use crate::search;

/// Failures while parsing a saved game snapshot. Live play never errors:
/// illegal moves are a `false`, absent computer moves a `None`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("snapshot is empty")]
    Empty,
    #[error("malformed placement field: {0}")]
    BadPlacement(String),
    #[error("unknown piece letter: {0}")]
    BadPieceChar(char),
    #[error("bad side to move: {0}")]
    BadSide(String),
    #[error("malformed move token: {0}")]
    BadMove(String),
}

/// The authoritative game state: board, side to move, and the append-only
/// log of applied moves. Collaborators read through the query methods and
/// mutate only through `try_move` / `request_automated_move` / `reset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    history: Vec<Move>,
}

impl Game {
    /// Fresh game in the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            side_to_move: Color::White,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Lenient piece query; out-of-range coordinates read as empty.
    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        self.board.piece_at(sq)
    }

    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        movegen::is_legal_move(&self.board, self.side_to_move, from, to)
    }

    /// Validate and apply. On success the moving piece relocates (capturing
    /// by overwrite), the move is appended to history, and the turn flips.
    /// On failure nothing changes.
    pub fn try_move(&mut self, from: Square, to: Square) -> bool {
        if !self.is_legal_move(from, to) {
            debug!("rejected {}{} for {:?}", from, to, self.side_to_move);
            return false;
        }
        let piece = self.board.piece_at(from);
        self.board.set(to, piece);
        self.board.set(from, None);
        self.history.push(Move::new(from, to));
        debug!("applied {}{} by {:?}", from, to, self.side_to_move);
        self.side_to_move = self.side_to_move.opposite();
        true
    }

    /// All legal moves for `side`. Legality is judged against the actual
    /// side to move, so asking for the side not on move yields an empty list.
    pub fn legal_moves(&self, side: Color) -> Vec<Move> {
        movegen::legal_moves(&self.board, self.side_to_move, side)
    }

    /// Greedy one-ply computer move for `side`, applied on success. `None`
    /// means no legal move exists and the game is over.
    pub fn request_automated_move(&mut self, side: Color) -> Option<Move> {
        search::select_best_move(self, side, &mut rand::thread_rng())
    }

    /// Throw everything away and re-seed the standard starting position.
    pub fn reset(&mut self) {
        debug!("reset to starting position");
        *self = Game::new();
    }

    /// Text snapshot: a FEN-style placement field with the side to move,
    /// then the move history in long algebraic form on a second line.
    pub fn save_state(&self) -> String {
        let side = match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let history: Vec<String> = self.history.iter().map(|mv| mv.to_string()).collect();
        format!("{} {}\n{}\n", self.board.placement(), side, history.join(" "))
    }

    /// Rebuild a game from a `save_state` snapshot. The placement line is
    /// authoritative; the history is restored verbatim, not replayed.
    pub fn restore_state(text: &str) -> Result<Game, StateError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(StateError::Empty)?;
        let mut fields = header.split_whitespace();
        let placement = fields.next().ok_or(StateError::Empty)?;
        let board = Board::from_placement(placement)?;
        let side_to_move = match fields.next() {
            Some("w") => Color::White,
            Some("b") => Color::Black,
            other => return Err(StateError::BadSide(other.unwrap_or("").to_string())),
        };

        let mut history = Vec::new();
        if let Some(line) = lines.next() {
            for token in line.split_whitespace() {
                history.push(parse_move_token(token)?);
            }
        }

        Ok(Game {
            board,
            side_to_move,
            history,
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

fn parse_move_token(token: &str) -> Result<Move, StateError> {
    let bad = || StateError::BadMove(token.to_string());
    let chars: Vec<char> = token.chars().collect();
    if chars.len() != 4 {
        return Err(bad());
    }
    let square = |file_c: char, rank_c: char| -> Result<Square, StateError> {
        if !('a'..='h').contains(&file_c) || !('1'..='8').contains(&rank_c) {
            return Err(bad());
        }
        Ok(Square::new(
            file_c as i8 - 'a' as i8,
            rank_c as i8 - '1' as i8,
        ))
    };
    Ok(Move::new(
        square(chars[0], chars[1])?,
        square(chars[2], chars[3])?,
    ))
}
