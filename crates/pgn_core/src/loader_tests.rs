use super::*;
use std::io::Write;

const TWO_GAMES: &str = r#"[Event "Club"]
[White "A"]
[Black "B"]
[Result "1-0"]

1. e4 e5 2. Qh5 Nc6 1-0

[Event "Club"]
[White "C"]
[Black "D"]
[Result "1/2-1/2"]

1. d4 d5 1/2-1/2
"#;

#[test]
fn test_read_two_games() {
    let games = read_games(TWO_GAMES.as_bytes()).unwrap();

    assert_eq!(games.len(), 2);
    assert_eq!(games[0].move_count(), 4);
    assert_eq!(games[0].result(), GameResult::WhiteWins);
    assert_eq!(games[1].move_count(), 2);
    assert_eq!(games[1].result(), GameResult::Draw);
}

#[test]
fn test_san_is_kept_per_move() {
    let games = read_games(TWO_GAMES.as_bytes()).unwrap();
    let sans: Vec<&str> = games[0].moves().iter().map(|m| m.san.as_str()).collect();
    assert_eq!(sans, ["e4", "e5", "Qh5", "Nc6"]);
}

#[test]
fn test_variations_are_skipped() {
    let pgn = "[Result \"0-1\"]\n\n1. e4 (1. d4 d5) 1... e5 2. Nf3 (2. f4) 2... Nc6 0-1\n";
    let games = read_games(pgn.as_bytes()).unwrap();

    let sans: Vec<&str> = games[0].moves().iter().map(|m| m.san.as_str()).collect();
    assert_eq!(sans, ["e4", "e5", "Nf3", "Nc6"]);
    assert_eq!(games[0].result(), GameResult::BlackWins);
}

#[test]
fn test_result_falls_back_to_movetext() {
    let pgn = "1. e4 e5 0-1\n";
    let games = read_games(pgn.as_bytes()).unwrap();
    assert_eq!(games[0].result(), GameResult::BlackWins);
}

#[test]
fn test_result_header_wins_over_movetext() {
    let pgn = "[Result \"1/2-1/2\"]\n\n1. e4 e5 *\n";
    let games = read_games(pgn.as_bytes()).unwrap();
    assert_eq!(games[0].result(), GameResult::Draw);
}

#[test]
fn test_fen_header_sets_initial_position() {
    let pgn = "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 w - - 0 1\"]\n[Result \"*\"]\n\n1. e4 Kd7 *\n";
    let games = read_games(pgn.as_bytes()).unwrap();

    let initial = games[0].initial_position().board();
    assert_eq!(initial.occupied().count(), 3);
    assert_eq!(games[0].move_count(), 2);
}

#[test]
fn test_illegal_move_is_parse_error() {
    let pgn = format!("{}\n[Result \"*\"]\n\n1. e4 e5 2. Ke3 *\n", TWO_GAMES);
    let err = read_games(pgn.as_bytes()).unwrap_err();

    match err {
        LoadError::Parse { game, message } => {
            assert_eq!(game, 3);
            assert!(message.contains("Ke3"), "unexpected message: {}", message);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_invalid_fen_is_parse_error() {
    let pgn = "[FEN \"not a fen\"]\n\n1. e4 *\n";
    let err = read_games(pgn.as_bytes()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { game: 1, .. }));
}

#[test]
fn test_empty_input_reads_no_games() {
    let games = read_games("".as_bytes()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_load_games_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(TWO_GAMES.as_bytes()).unwrap();

    let collection = load_games(file.path()).unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.origin(), Some(file.path()));
}

#[test]
fn test_load_empty_file_is_rejected() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let err = load_games(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoGames { .. }));
}

#[test]
fn test_load_missing_file_is_file_access_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.pgn");

    let err = load_games(&path).unwrap_err();
    match err {
        LoadError::FileAccess { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected file access error, got {:?}", other),
    }
}

#[test]
fn test_prose_without_tags_is_not_a_game() {
    let games = read_games("These are my notes, not a game.\n".as_bytes()).unwrap();
    assert!(games.is_empty());
}

#[test]
fn test_prose_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"Shopping list: milk, eggs\n").unwrap();

    let err = load_games(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::NoGames { .. }));
}

#[test]
fn test_bare_result_marker_is_a_game() {
    let games = read_games("1-0\n".as_bytes()).unwrap();
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].move_count(), 0);
    assert_eq!(games[0].result(), GameResult::WhiteWins);
}

#[test]
fn test_non_san_tokens_are_dropped() {
    let games = read_games("[Result \"*\"]\n\n1. d4 Zz9 2. d5 *\n".as_bytes()).unwrap();
    let sans: Vec<&str> = games[0].moves().iter().map(|m| m.san.as_str()).collect();
    assert_eq!(sans, ["d4", "d5"]);
}

#[test]
fn test_invalid_utf8_tag_is_parse_error() {
    let mut pgn = TWO_GAMES.as_bytes().to_vec();
    pgn.extend_from_slice(b"\n[White \"\xff\xfe\"]\n[Result \"*\"]\n\n1. e4 *\n");

    match read_games(pgn.as_slice()).unwrap_err() {
        LoadError::Parse { game, message } => {
            assert_eq!(game, 3);
            assert!(message.contains("White"), "unexpected message: {}", message);
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}
