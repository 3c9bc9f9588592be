//! End-to-end game scenarios for the Ultimate Tic-Tac-Toe engine.

use ultimate_ttt::{
    GameState, GameStatus, History, Mark, MoveError, MoveErrorKind, Position, Square, new_game,
    status,
};

/// Board 0 is filled in the order 0,1,2,3,4,6,5,8,7 with X and O alternating
/// inside it; the other moves route the forced board back to 0.
const FILL_BOARD_ZERO: [(usize, usize); 23] = [
    (0, 0), (0, 1), (1, 1), (1, 0), (0, 2), (2, 2), (2, 0), (0, 3),
    (3, 3), (3, 0), (0, 4), (4, 4), (4, 0), (0, 6), (6, 5), (5, 0),
    (0, 5), (5, 6), (6, 0), (0, 8), (8, 7), (7, 0), (0, 7),
];

/// X wins sub-boards 0 (move 7), 4 (move 11) and 8 (move 19): the diagonal.
const X_WINS_DIAGONAL: [(usize, usize); 19] = [
    (0, 1), (1, 0), (0, 7), (7, 4), (4, 7), (7, 0), (0, 4), (4, 4),
    (4, 6), (6, 0), (4, 8), (8, 0), (8, 1), (1, 4), (8, 4), (7, 3),
    (3, 0), (6, 8), (8, 7),
];

/// A full game ending with every sub-board closed and no global line.
const DRAWN_GAME: [(usize, usize); 67] = [
    (8, 8), (8, 6), (6, 5), (5, 8), (8, 4), (4, 2), (2, 0), (0, 3),
    (3, 5), (5, 4), (4, 6), (6, 6), (6, 3), (3, 7), (7, 4), (4, 4),
    (4, 1), (1, 1), (1, 0), (0, 7), (7, 5), (5, 7), (7, 8), (8, 2),
    (2, 6), (6, 2), (2, 1), (1, 7), (7, 6), (6, 8), (8, 5), (5, 2),
    (2, 8), (8, 1), (1, 8), (8, 3), (3, 6), (6, 0), (0, 6), (6, 1),
    (1, 6), (7, 1), (1, 5), (5, 3), (3, 2), (2, 2), (2, 5), (5, 0),
    (0, 4), (4, 8), (8, 7), (7, 3), (3, 0), (0, 8), (8, 0), (0, 2),
    (2, 4), (4, 7), (7, 7), (1, 2), (0, 5), (0, 1), (1, 4), (4, 3),
    (3, 4), (4, 0), (0, 0),
];

fn play_all(moves: &[(usize, usize)]) -> GameState {
    moves
        .iter()
        .fold(GameState::default(), |state, &(b, c)| {
            state
                .apply_move(b, c)
                .unwrap_or_else(|e| panic!("move ({b}, {c}) rejected: {e}"))
        })
}

#[test]
fn test_new_game_is_empty_with_x_to_move() {
    let state = new_game(None);
    assert_eq!(state.boards().len(), 9);
    for board in state.boards() {
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
    }
    assert_eq!(state.current_player(), Mark::X);
    assert_eq!(state.winner(), None);
    assert!(!state.is_draw());
    assert_eq!(status(&state), "X's turn");
}

#[test]
fn test_first_move_sets_cell_and_forces_board() {
    let state = GameState::default().apply_move(0, 0).unwrap();
    assert_eq!(
        state.board(Position::TopLeft).get(Position::TopLeft),
        Square::Occupied(Mark::X)
    );
    assert_eq!(state.current_player(), Mark::O);
    assert_eq!(state.active_board(), Some(Position::TopLeft));
}

#[test]
fn test_wrong_board_names_the_forced_board() {
    let state = play_all(&[(0, 0), (0, 3)]);
    assert_eq!(state.active_board(), Some(Position::MiddleLeft));

    let err = state.apply_move(0, 1).unwrap_err();
    assert_eq!(err, MoveError::WrongBoard { required: Position::MiddleLeft });
    assert!(err.to_string().contains("board 3"));
}

#[test]
fn test_filled_board_without_line_has_no_mini_winner() {
    let state = play_all(&FILL_BOARD_ZERO);
    let board = state.board(Position::TopLeft);
    assert!(board.is_full());
    assert_eq!(state.mini_winner(Position::TopLeft), None);
    assert_eq!(state.winner(), None);
    assert!(state.is_board_closed(Position::TopLeft));
}

#[test]
fn test_full_board_releases_the_forced_board() {
    let state = play_all(&FILL_BOARD_ZERO);
    // O sends X to board 8, X then points at the full board 0.
    let state = state.apply_move(7, 8).unwrap();
    assert_eq!(state.active_board(), Some(Position::BottomRight));
    let state = state.apply_move(8, 0).unwrap();
    assert_eq!(state.active_board(), None);

    // Any open board is now legal for O.
    assert!(state.apply_move(5, 5).is_ok());
    assert!(state.apply_move(2, 3).is_ok());
}

#[test]
fn test_mini_board_diagonal_wins_game() {
    let mut history = History::default();
    for &(b, c) in &X_WINS_DIAGONAL {
        history.apply_move(b, c).unwrap();
    }
    let state = history.latest();

    assert_eq!(state.mini_winner(Position::TopLeft), Some(Mark::X));
    assert_eq!(state.mini_winner(Position::Center), Some(Mark::X));
    assert_eq!(state.mini_winner(Position::BottomRight), Some(Mark::X));
    assert_eq!(state.winner(), Some(Mark::X));
    assert!(!state.is_draw());
    assert_eq!(state.status(), GameStatus::Won(Mark::X));
    assert_eq!(status(state), "X wins");
    // The turn still flips on the winning move.
    assert_eq!(state.current_player(), Mark::O);

    for board in 0..9 {
        for cell in 0..9 {
            assert_eq!(state.apply_move(board, cell), Err(MoveError::GameOver));
        }
    }
    assert_eq!(state.apply_move(99, 0), Err(MoveError::GameOver));
    assert!(state.legal_moves().is_empty());
}

#[test]
fn test_won_sub_board_releases_the_forced_board() {
    // After move 7 X owns board 0; O's (6, 0) would force X into it.
    let state = play_all(&X_WINS_DIAGONAL[..10]);
    assert_eq!(state.mini_winner(Position::TopLeft), Some(Mark::X));
    assert_eq!(state.active_board(), None);
}

#[test]
fn test_playing_into_won_board_is_rejected() {
    let state = play_all(&X_WINS_DIAGONAL[..10]);
    let err = state.apply_move(0, 0).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::BoardAlreadyWon);
    assert_eq!(err.to_string(), "This mini-board has already been won.");
}

#[test]
fn test_mini_winner_is_recorded_once() {
    let mut recorded: [Option<Mark>; 9] = [None; 9];
    let mut state = GameState::default();
    for &(b, c) in &X_WINS_DIAGONAL {
        state = state.apply_move(b, c).unwrap();
        for pos in Position::ALL {
            let now = state.mini_winner(pos);
            match recorded[pos.index()] {
                Some(mark) => assert_eq!(now, Some(mark)),
                None => recorded[pos.index()] = now,
            }
        }
    }
}

#[test]
fn test_out_of_range_board_index() {
    let fresh = GameState::default();
    let err = fresh.apply_move(99, 0).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::OutOfRange);
    assert_eq!(err.to_string(), "Board index must be in range [0, 8].");

    let mid_game = play_all(&FILL_BOARD_ZERO);
    assert_eq!(mid_game.apply_move(99, 0).unwrap_err().kind(), MoveErrorKind::OutOfRange);
    assert_eq!(
        mid_game.apply_move(7, 9).unwrap_err().to_string(),
        "Cell index must be in range [0, 8]."
    );
}

#[test]
fn test_occupied_cell_is_rejected() {
    let state = GameState::default().apply_move(0, 0).unwrap();
    let err = state.apply_move(0, 0).unwrap_err();
    assert_eq!(err.kind(), MoveErrorKind::CellOccupied);
    assert_eq!(err.to_string(), "Cell already occupied.");
}

#[test]
fn test_drawn_game() {
    let state = play_all(&DRAWN_GAME);
    assert!(state.is_draw());
    assert_eq!(state.winner(), None);
    assert_eq!(status(&state), "draw");
    assert!(Position::ALL.iter().all(|&b| state.is_board_closed(b)));
    assert_eq!(state.apply_move(0, 0), Err(MoveError::GameOver));
}

#[test]
fn test_starting_mark_o() {
    let state = new_game(Some(Mark::O));
    assert_eq!(status(&state), "O's turn");
    let state = state.apply_move(4, 4).unwrap();
    assert_eq!(
        state.board(Position::Center).get(Position::Center),
        Square::Occupied(Mark::O)
    );
    assert_eq!(state.current_player(), Mark::X);
}

#[test]
fn test_state_serializes_to_wire_shape() {
    let state = play_all(&[(0, 0), (0, 3)]);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["boards"][0][0], "X");
    assert_eq!(json["boards"][0][3], "O");
    assert!(json["boards"][0][1].is_null());
    assert_eq!(json["active_board"], 3);
    assert_eq!(json["current_player"], "X");
    assert!(json["winner"].is_null());
    assert_eq!(json["is_draw"], false);
    assert_eq!(json["mini_winners"].as_array().unwrap().len(), 9);

    let back: GameState = serde_json::from_value(json).unwrap();
    assert_eq!(back, state);
}
