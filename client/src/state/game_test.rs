use super::*;

#[test]
fn game_state_default_has_no_captures() {
    let state = GameState::default();
    assert!(state.captured_white().is_empty());
    assert!(state.captured_black().is_empty());
}

#[test]
fn accessors_return_each_side() {
    let state = GameState {
        captured: CapturedPieces { captured_white: "PN".parse().unwrap(), captured_black: "q".parse().unwrap() },
    };
    assert_eq!(state.captured_white().len(), 2);
    assert_eq!(state.captured_black().iter().collect::<Vec<_>>(), vec![pieces::PieceCode::BlackQueen]);
}
