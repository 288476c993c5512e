//! Tests for the exact search: forced wins, blocks and full-game outcomes.

use noughts::{Board, Mark, Square, best_move};

fn place(board: &mut Board, cells: &[usize], mark: Mark) {
    for &cell in cells {
        board.set(cell, Square::Occupied(mark)).expect("valid move");
    }
}

/// Plays both sides optimally until the game ends.
fn play_out(board: &mut Board, mut to_move: Mark) {
    while !board.is_win(Mark::Nought) && !board.is_win(Mark::Cross) && !board.is_draw() {
        let cell = best_move(board, to_move);
        board
            .set(cell, Square::Occupied(to_move))
            .expect("search returns a legal cell");
        to_move = to_move.opponent();
    }

    // legal play can never satisfy the win predicate for both marks
    assert!(!(board.is_win(Mark::Nought) && board.is_win(Mark::Cross)));
}

#[test]
fn test_completes_winning_row() {
    //  X X .
    //  O O .
    //  . . .
    let mut board = Board::new(3);
    place(&mut board, &[0, 1], Mark::Cross);
    place(&mut board, &[3, 4], Mark::Nought);

    assert_eq!(best_move(&mut board, Mark::Cross), 2);
}

#[test]
fn test_blocks_diagonal_threat() {
    //  O X .
    //  . O .
    //  . . .
    // Anything but cell 8 lets Nought complete the diagonal.
    let mut board = Board::new(3);
    place(&mut board, &[0, 4], Mark::Nought);
    place(&mut board, &[1], Mark::Cross);

    assert_eq!(best_move(&mut board, Mark::Cross), 8);
}

#[test]
fn test_prefers_fastest_win() {
    //  X O .
    //  . X .
    //  O . .
    // Cell 8 wins immediately; any other cell wins two plies later at best.
    let mut board = Board::new(3);
    place(&mut board, &[0, 4], Mark::Cross);
    place(&mut board, &[1, 6], Mark::Nought);

    assert_eq!(best_move(&mut board, Mark::Cross), 8);
}

#[test]
fn test_opening_corner_or_center() {
    let optimal = [0, 2, 4, 6, 8];

    for mark in [Mark::Nought, Mark::Cross] {
        let mut board = Board::new(3);
        let cell = best_move(&mut board, mark);
        assert!(optimal.contains(&cell), "cell {cell} is a losing opening");
    }
}

#[test]
fn test_search_leaves_board_unchanged() {
    let mut board = Board::new(3);
    place(&mut board, &[0, 4], Mark::Nought);
    place(&mut board, &[1], Mark::Cross);
    let snapshot = board.clone();

    best_move(&mut board, Mark::Cross);

    assert_eq!(board, snapshot);
}

#[test]
fn test_optimal_self_play_draws() {
    let mut board = Board::new(3);

    play_out(&mut board, Mark::Nought);

    assert!(board.is_draw());
}

#[test]
fn test_never_loses_any_opening() {
    // The opponent opens anywhere; from then on both sides play optimally.
    // Every such game ends in a draw, so the engine in particular never
    // loses.
    for opening in 0..9 {
        let mut board = Board::new(3);
        board
            .set(opening, Square::Occupied(Mark::Nought))
            .expect("valid move");

        play_out(&mut board, Mark::Cross);

        assert!(
            !board.is_win(Mark::Nought),
            "engine lost after opening {opening}"
        );
        assert!(board.is_draw(), "opening {opening} did not end in a draw");
    }
}

#[test]
#[should_panic(expected = "no legal move left")]
fn test_panics_on_full_board() {
    //  X O X
    //  X O O
    //  O X X
    let mut board = Board::new(3);
    place(&mut board, &[0, 2, 3, 7, 8], Mark::Cross);
    place(&mut board, &[1, 4, 5, 6], Mark::Nought);

    best_move(&mut board, Mark::Cross);
}
