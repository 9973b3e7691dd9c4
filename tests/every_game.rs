//! Walks every game reachable through `play` alone.

use duottt::{GameEngine, IllegalMove, Mark, MoveResult, Status, SQUARES};

#[derive(Default)]
struct Tally {
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
}

fn assert_mark_balance(engine: &GameEngine) {
    let board = engine.state().board();
    let (xs, os) = (board.count(Mark::X), board.count(Mark::O));
    assert!(xs == os || xs == os + 1, "unbalanced board:\n{}", board);
}

fn walk(engine: &GameEngine, tally: &mut Tally) {
    for index in 0..SQUARES {
        let mut next = *engine;
        let result = next.play(index);
        assert_mark_balance(&next);

        if !engine.state().board().is_empty(index) {
            assert_eq!(result, MoveResult::IllegalMove(IllegalMove::Occupied(index)));
            assert_eq!(next, *engine);
            continue;
        }

        match result {
            MoveResult::Continue { next_player } => {
                assert_eq!(next_player, engine.state().current_player().swap());
                walk(&next, tally);
            }
            MoveResult::Win { player, line } => {
                assert_eq!(player, engine.state().current_player());
                assert!(line.contains(index));
                assert_eq!(next.state().status(), Status::Won(player, line));
                assert_finished(&next);
                tally.games += 1;
                match player {
                    Mark::X => tally.x_wins += 1,
                    Mark::O => tally.o_wins += 1,
                }
            }
            MoveResult::Draw => {
                assert!(next.state().board().is_full());
                assert_finished(&next);
                tally.games += 1;
                tally.draws += 1;
            }
            MoveResult::IllegalMove(reason) => panic!("legal move refused: {reason}"),
        }
    }
}

fn assert_finished(engine: &GameEngine) {
    for index in 0..SQUARES {
        let mut after = *engine;
        assert_eq!(after.play(index), MoveResult::IllegalMove(IllegalMove::GameOver));
        assert_eq!(after, *engine);
    }
}

#[test]
fn test_every_game() {
    let mut tally = Tally::default();
    walk(&GameEngine::new(), &mut tally);

    assert_eq!(tally.games, 255_168);
    assert_eq!(tally.x_wins, 131_184);
    assert_eq!(tally.o_wins, 77_904);
    assert_eq!(tally.draws, 46_080);
}
