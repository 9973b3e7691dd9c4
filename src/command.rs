use std::str::FromStr;

use crate::error::Error;

/// Something a player asked for. Squares are typed as 1-9 and stored as
/// board indices 0-8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Restart,
}

impl Command {
    pub fn index(&self) -> Option<usize> {
        match self {
            Command::Play(index) => Some(*index),
            Command::Restart => None,
        }
    }

    pub fn is_restart(&self) -> bool {
        matches!(self, Command::Restart)
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("r") || s.eq_ignore_ascii_case("restart") {
            return Ok(Command::Restart);
        }
        if !s.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
            return Err(Error::UnknownCommand(s.to_string()));
        }

        let label = s.parse::<usize>().map_err(Error::InvalidInteger)?;
        if (1..=9).contains(&label) {
            Ok(Command::Play(label - 1))
        } else {
            Err(Error::InvalidIndex(label))
        }
    }
}
