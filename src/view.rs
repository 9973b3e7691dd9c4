//! What a front end should show for a given game state.
//!
//! A [`View`] is rebuilt from scratch for every state, so a restarted game
//! renders clean without any explicit clearing step.

use crate::board::{Mark, SQUARES};
use crate::engine::{GameState, Status};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CellView {
    pub mark: Option<Mark>,
    pub winning: bool,
    pub draw: bool,
    pub disabled: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BannerKind {
    XTurn,
    OTurn,
    WinnerX,
    WinnerO,
    Draw,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub kind: BannerKind,
}

impl Banner {
    pub fn of(state: &GameState) -> Banner {
        match state.status() {
            Status::Active => {
                let player = state.current_player();
                let kind = match player {
                    Mark::X => BannerKind::XTurn,
                    Mark::O => BannerKind::OTurn,
                };
                Banner {
                    text: format!("Turn: {}", player),
                    kind,
                }
            }
            Status::Won(winner, _) => {
                let kind = match winner {
                    Mark::X => BannerKind::WinnerX,
                    Mark::O => BannerKind::WinnerO,
                };
                Banner {
                    text: format!("{} wins!", winner),
                    kind,
                }
            }
            Status::Drawn => Banner {
                text: "Draw!".to_string(),
                kind: BannerKind::Draw,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct View {
    pub cells: [CellView; SQUARES],
    pub banner: Banner,
    pub input_enabled: bool,
}

impl View {
    pub fn of(state: &GameState) -> View {
        let status = state.status();
        let input_enabled = state.is_active();

        let mut cells = [CellView::default(); SQUARES];
        for (index, cell) in cells.iter_mut().enumerate() {
            *cell = CellView {
                mark: state.board().get(index),
                winning: matches!(status, Status::Won(_, line) if line.contains(index)),
                draw: status == Status::Drawn,
                disabled: !input_enabled,
            };
        }

        View {
            cells,
            banner: Banner::of(state),
            input_enabled,
        }
    }

    pub fn winning_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.winning)
            .map(|(index, _)| index)
    }
}

impl Default for View {
    fn default() -> Self {
        View::of(&GameState::new())
    }
}
