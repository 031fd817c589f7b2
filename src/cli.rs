use anyhow::{Context, Result};
use log::info;
use std::fs;
use std::io::{self, BufRead, Write};

use crate::board::{Color, Square};
use crate::game::Game;

/// Interactive console front-end. Owns a `Game` and drives it the only two
/// ways a collaborator may: attempted moves and automated-move requests.
/// The human plays White; the computer answers as Black.
pub struct CliSession {
    game: Game,
}

impl CliSession {
    pub fn new() -> Self {
        CliSession { game: Game::new() }
    }

    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();
        let mut reader = stdin.lock();
        let mut line = String::new();

        print!("{}", self.game.board());
        self.print_turn();

        while reader.read_line(&mut line)? > 0 {
            let command = line.trim();

            match command {
                "quit" => break,
                "" => {}
                "board" => print!("{}", self.game.board()),
                "new" => {
                    self.game.reset();
                    print!("{}", self.game.board());
                    self.print_turn();
                }
                "go" => self.computer_move(),
                cmd if cmd.starts_with("save ") => {
                    if let Err(e) = self.handle_save(cmd[5..].trim()) {
                        println!("save failed: {:#}", e);
                    }
                }
                cmd if cmd.starts_with("load ") => {
                    if let Err(e) = self.handle_load(cmd[5..].trim()) {
                        println!("load failed: {:#}", e);
                    }
                }
                cmd => self.handle_move(cmd),
            }

            stdout.flush()?;
            line.clear();
        }
        Ok(())
    }

    fn handle_move(&mut self, input: &str) {
        let parsed = match parse_move(input) {
            Some(pair) => pair,
            None => {
                println!("unrecognized command or move: {}", input);
                return;
            }
        };
        let (from, to) = parsed;
        if !self.game.try_move(from, to) {
            println!("illegal move: {}{}", from, to);
            return;
        }
        print!("{}", self.game.board());

        // The computer replies whenever the move hands the turn to Black.
        if self.game.side_to_move() == Color::Black {
            self.computer_move();
        } else {
            self.print_turn();
        }
    }

    fn computer_move(&mut self) {
        let side = self.game.side_to_move();
        match self.game.request_automated_move(side) {
            Some(mv) => {
                println!("computer plays {}", mv);
                print!("{}", self.game.board());
                self.print_turn();
            }
            // No distinction between checkmate and stalemate exists in this
            // rule set; all the engine knows is that no move is available.
            None => println!("game over: {:?} has no legal moves", side),
        }
    }

    fn handle_save(&self, path: &str) -> Result<()> {
        fs::write(path, self.game.save_state())
            .with_context(|| format!("writing {}", path))?;
        info!("saved game to {}", path);
        Ok(())
    }

    fn handle_load(&mut self, path: &str) -> Result<()> {
        let text = fs::read_to_string(path).with_context(|| format!("reading {}", path))?;
        self.game = Game::restore_state(&text).with_context(|| format!("parsing {}", path))?;
        info!("loaded game from {}", path);
        print!("{}", self.game.board());
        self.print_turn();
        Ok(())
    }

    fn print_turn(&self) {
        println!("{:?} to move", self.game.side_to_move());
    }
}

/// Parse a move in long algebraic coordinates, e.g. `e2e4`.
fn parse_move(input: &str) -> Option<(Square, Square)> {
    if input.len() != 4 {
        return None;
    }
    let mut chars = input.chars();
    let from_file = chars.next()?;
    let from_rank = chars.next()?;
    let to_file = chars.next()?;
    let to_rank = chars.next()?;

    let square = |file: char, rank: char| -> Option<Square> {
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return None;
        }
        Some(Square::new(file as i8 - 'a' as i8, rank as i8 - '1' as i8))
    };

    Some((square(from_file, from_rank)?, square(to_file, to_rank)?))
}
