use std::num::ParseIntError;

use thiserror::Error;

/// Why the engine refused a move. Refused moves leave the game untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("index {0} is off the board")]
    OutOfBounds(usize),

    #[error("square {} is already taken", .0 + 1)]
    Occupied(usize),

    #[error("the game is over, restart to play again")]
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid move: {0}!")]
    IllegalMove(#[from] IllegalMove),

    #[error("invalid index: {0}!")]
    InvalidIndex(usize),

    #[error("invalid input: {0}!")]
    InvalidInteger(ParseIntError),

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}
