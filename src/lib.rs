pub mod board;
pub mod cli;
pub mod evaluation;
pub mod game;
pub mod movegen;
pub mod search;
