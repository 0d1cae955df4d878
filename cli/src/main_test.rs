use super::*;

fn args(white: &str, black: &str, taken: &str) -> CapturedArgs {
    CapturedArgs { white: white.to_owned(), black: black.to_owned(), taken: taken.to_owned() }
}

#[test]
fn captured_lines_render_both_rows() {
    let lines = captured_lines(&args("", "pq", "")).unwrap();
    assert_eq!(lines, vec!["Captured by White: ♟♛".to_owned(), "Captured by Black: None".to_owned()]);
}

#[test]
fn taken_pieces_are_routed_by_case() {
    let lines = captured_lines(&args("", "", "pQn")).unwrap();
    assert_eq!(lines, vec!["Captured by White: ♟♞".to_owned(), "Captured by Black: ♕".to_owned()]);
}

#[test]
fn taken_pieces_append_after_explicit_lists() {
    let lines = captured_lines(&args("P", "r", "R b")).unwrap();
    assert_eq!(lines, vec!["Captured by White: ♜♝".to_owned(), "Captured by Black: ♙♖".to_owned()]);
}

#[test]
fn unknown_code_is_an_error() {
    assert!(matches!(captured_lines(&args("K", "", "")), Err(CliError::Piece(PieceError::UnknownCode('K')))));
}

#[test]
fn cli_parses_session_check_with_defaults() {
    let cli = Cli::try_parse_from(["indichess", "session", "check"]).unwrap();
    assert_eq!(cli.auth_url, "http://localhost:8080");
    assert_eq!(cli.attempts, 1);
    assert!(matches!(cli.command, Command::Session(SessionCommand { command: SessionSubcommand::Check })));
}

#[test]
fn cli_parses_captured_positional() {
    let cli = Cli::try_parse_from(["indichess", "captured", "--black", "pq", "N"]).unwrap();
    let Command::Captured(captured) = cli.command else {
        panic!("expected captured command");
    };
    assert_eq!(captured.black, "pq");
    assert_eq!(captured.taken, "N");
}
