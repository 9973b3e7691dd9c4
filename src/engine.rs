use tracing::{debug, info, instrument};

use crate::board::{Board, Mark, WinningLine, SQUARES};
use crate::error::IllegalMove;

/// Where a game stands. `Active` is the only non-terminal status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    Active,
    Won(Mark, WinningLine),
    Drawn,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Mark,
    status: Status,
}

impl GameState {
    pub fn new() -> Self {
        Self::in_progress(Board::new(), Mark::X)
    }

    /// An active game over an arbitrary board. The board is not checked for
    /// reachability, which makes it possible to set up positions normal play
    /// never produces.
    pub fn in_progress(board: Board, current_player: Mark) -> Self {
        Self {
            board,
            current_player,
            status: Status::Active,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveResult {
    Continue { next_player: Mark },
    Win { player: Mark, line: WinningLine },
    Draw,
    IllegalMove(IllegalMove),
}

impl MoveResult {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveResult::Win { .. } | MoveResult::Draw)
    }

    pub fn illegal(&self) -> Option<IllegalMove> {
        match self {
            MoveResult::IllegalMove(reason) => Some(*reason),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    pub fn with_state(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark at `index`.
    ///
    /// A refused move is reported as [`MoveResult::IllegalMove`] and changes
    /// nothing. An accepted move is checked for a win first, then for a
    /// draw; either one ends the game, otherwise the turn passes.
    #[instrument(level = "debug", skip(self), fields(player = %self.state.current_player))]
    pub fn play(&mut self, index: usize) -> MoveResult {
        if let Err(reason) = self.check(index) {
            debug!(%reason, "move refused");
            return MoveResult::IllegalMove(reason);
        }

        let player = self.state.current_player;
        self.state.board.set(index, player);

        if let Some((winner, line)) = self.state.board.winning_line() {
            info!(%winner, line = ?line.indices(), "game won");
            self.state.status = Status::Won(winner, line);
            return MoveResult::Win {
                player: winner,
                line,
            };
        }

        if self.state.board.is_full() {
            info!("game drawn");
            self.state.status = Status::Drawn;
            return MoveResult::Draw;
        }

        self.state.current_player = player.swap();
        debug!(next_player = %self.state.current_player, "move accepted");
        MoveResult::Continue {
            next_player: self.state.current_player,
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }

    fn check(&self, index: usize) -> Result<(), IllegalMove> {
        if !self.state.is_active() {
            return Err(IllegalMove::GameOver);
        }
        if index >= SQUARES {
            return Err(IllegalMove::OutOfBounds(index));
        }
        if !self.state.board.is_empty(index) {
            return Err(IllegalMove::Occupied(index));
        }
        Ok(())
    }
}
