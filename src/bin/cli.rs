use std::io::{self, BufRead};

use sodium::{SodiumCtx, StreamSink};
use tracing_subscriber::EnvFilter;

use duottt::{Error, GameState, Mark, MoveResult, TicTacToe};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let ctx = SodiumCtx::new();

    let (kb_input, game, _listeners) = ctx.transaction(|| {
        let mut listeners = Vec::new();

        let kb_input: StreamSink<String> = ctx.new_stream_sink();
        let game = TicTacToe::new(&ctx, &kb_input.stream());

        listeners.push(game.error.listen(|err: &Error| println!("{}", err)));

        listeners.push(game.moves.listen(|(index, mark): &(usize, Mark)| {
            println!("\n{}s took square {}:", mark, index + 1)
        }));

        listeners.push(game.state.updates().listen(|state: &GameState| {
            println!("{}", state.board());
            if state.is_active() {
                println!("{} to move.", state.current_player());
            }
        }));

        listeners.push(game.results.listen(|result: &MoveResult| {
            match result {
                MoveResult::Win { player, line } => {
                    let [a, b, c] = line.indices();
                    println!("{} has won the game on {}-{}-{}!", player, a + 1, b + 1, c + 1);
                }
                MoveResult::Draw => println!("Draw! Nobody wins."),
                _ => {}
            }
            if result.is_terminal() {
                println!("Type r to play again.");
            }
        }));

        listeners.push(game.resets.listen(|_: &()| println!("\nNew game!")));

        (kb_input, game, listeners)
    });

    println!("Welcome to Tic Tac Toe!\n");
    println!("Type a square number (1-9) to play, or r to restart.\n");
    println!("{}", game.state.sample().board());
    println!("{} plays first!", game.turn.sample());

    let stdin = io::stdin().lock();
    for line in stdin.lines() {
        kb_input.send(line?);
    }

    Ok(())
}
