use sodium::{Cell, CellLoop, SodiumCtx, Stream};

mod board;
mod command;
mod engine;
mod error;
pub mod view;

pub use board::{Board, Mark, WinningLine, SQUARES, WINNING_LINES};
pub use command::Command;
pub use engine::{GameEngine, GameState, MoveResult, Status};
pub use error::{Error, IllegalMove};
pub use view::View;

/// A game wired up as streams and cells, fed by lines of player input.
///
/// Every input line is handled in one transaction, so `state`, `turn` and
/// `view` change together with whichever event streams fire for it.
pub struct TicTacToe {
    pub state: Cell<GameState>,
    pub turn: Cell<Mark>,
    pub view: Cell<View>,
    pub last_error: Cell<Option<Error>>,
    pub results: Stream<MoveResult>,
    pub moves: Stream<(usize, Mark)>,
    pub winner: Stream<(Mark, WinningLine)>,
    pub draw: Stream<()>,
    pub resets: Stream<()>,
    pub error: Stream<Error>,
}

/// One call to [`GameEngine::play`]: the engine afterwards, what it
/// returned, and the square and mark it was asked to place.
#[derive(Copy, Clone, Debug)]
struct Step {
    engine: GameEngine,
    result: MoveResult,
    index: usize,
    mark: Mark,
}

struct CommandParser {
    play_stream: Stream<usize>,
    restart_stream: Stream<()>,
    error_stream: Stream<Error>,
}

impl TicTacToe {
    pub fn new(ctx: &SodiumCtx, kb_input: &Stream<String>) -> TicTacToe {
        ctx.transaction(|| {
            let engine_cell_loop: CellLoop<GameEngine> = ctx.new_cell_loop();
            let engine_cell_fwd = engine_cell_loop.cell();

            let CommandParser {
                play_stream,
                restart_stream,
                error_stream: input_error_stream,
            } = CommandParser::new(kb_input);

            let step_stream =
                play_stream.snapshot(&engine_cell_fwd, |index: &usize, engine: &GameEngine| {
                    let mut engine = *engine;
                    let mark = engine.state().current_player();
                    let result = engine.play(*index);
                    Step {
                        engine,
                        result,
                        index: *index,
                        mark,
                    }
                });

            let engine_cell = step_stream
                .map(|step: &Step| step.engine)
                .or_else(&restart_stream.map(|_: &()| GameEngine::new()))
                .hold(GameEngine::new());
            engine_cell_loop.loop_(&engine_cell);

            let state_cell = engine_cell.map(|engine: &GameEngine| *engine.state());
            let view_cell = state_cell.map(|state: &GameState| View::of(state));

            let result_stream = step_stream.map(|step: &Step| step.result);

            // Refused and game-ending moves leave the turn where it was.
            let turn_cell = result_stream
                .map(|result: &MoveResult| match result {
                    MoveResult::Continue { next_player } => Some(*next_player),
                    _ => None,
                })
                .filter_option()
                .or_else(&restart_stream.map(|_: &()| Mark::X))
                .hold(Mark::X);

            let move_stream = step_stream
                .map(|step: &Step| match step.result {
                    MoveResult::IllegalMove(_) => None,
                    _ => Some((step.index, step.mark)),
                })
                .filter_option();

            let winner_stream = result_stream
                .map(|result: &MoveResult| match result {
                    MoveResult::Win { player, line } => Some((*player, *line)),
                    _ => None,
                })
                .filter_option();

            let draw_stream = result_stream
                .filter(|result: &MoveResult| *result == MoveResult::Draw)
                .map(|_: &MoveResult| ());

            let error_stream = result_stream
                .map(|result: &MoveResult| result.illegal())
                .filter_option()
                .map(|reason: &IllegalMove| Error::IllegalMove(*reason))
                .or_else(&input_error_stream);

            // An error wins over the clearing update fired by the same input.
            let last_error_cell = error_stream
                .map(|err: &Error| Some(err.clone()))
                .or_else(&state_cell.updates().map(|_: &GameState| None::<Error>))
                .hold(None);

            TicTacToe {
                state: state_cell,
                turn: turn_cell,
                view: view_cell,
                last_error: last_error_cell,
                results: result_stream,
                moves: move_stream,
                winner: winner_stream,
                draw: draw_stream,
                resets: restart_stream,
                error: error_stream,
            }
        })
    }
}

impl CommandParser {
    fn new(input_stream: &Stream<String>) -> CommandParser {
        let (command_stream, error_stream) = input_stream
            .map(|line: &String| line.parse::<Command>())
            .split_res();

        let play_stream = command_stream
            .map(|command: &Command| command.index())
            .filter_option();
        let restart_stream = command_stream
            .filter(|command: &Command| command.is_restart())
            .map(|_: &Command| ());

        CommandParser {
            play_stream,
            restart_stream,
            error_stream,
        }
    }
}
