use super::*;
use crate::loader::read_games;
use shakmaty::{Role, Square};

#[test]
fn test_result_from_tag() {
    assert_eq!(GameResult::from_tag("1-0"), GameResult::WhiteWins);
    assert_eq!(GameResult::from_tag("0-1"), GameResult::BlackWins);
    assert_eq!(GameResult::from_tag("1/2-1/2"), GameResult::Draw);
    assert_eq!(GameResult::from_tag("*"), GameResult::Unknown);
    assert_eq!(GameResult::from_tag(" 1-0 "), GameResult::WhiteWins);
    assert_eq!(GameResult::from_tag("white"), GameResult::Unknown);
}

#[test]
fn test_result_tag_text() {
    for result in [
        GameResult::WhiteWins,
        GameResult::BlackWins,
        GameResult::Draw,
        GameResult::Unknown,
    ] {
        assert_eq!(GameResult::from_tag(result.as_tag()), result);
    }
}

#[test]
fn test_unknown_result_has_no_announcement() {
    assert_eq!(GameResult::WhiteWins.announcement(), Some("White wins"));
    assert_eq!(GameResult::BlackWins.announcement(), Some("Black wins"));
    assert_eq!(GameResult::Draw.announcement(), Some("Draw"));
    assert_eq!(GameResult::Unknown.announcement(), None);
}

#[test]
fn test_positions_cover_every_prefix() {
    let pgn = "[White \"Anderssen\"]\n[Black \"Kieseritzky\"]\n[Result \"*\"]\n\n1. e4 e5 2. Nf3 *\n";
    let games = read_games(pgn.as_bytes()).unwrap();
    let game = &games[0];

    let positions = game.positions();
    assert_eq!(positions.len(), 4);
    assert_eq!(positions[0].board(), game.initial_position().board());

    let last = positions[3].board();
    let knight = last.piece_at(Square::F3).expect("knight on f3");
    assert_eq!(knight.role, Role::Knight);
    assert_eq!(knight.color, Color::White);
    assert!(last.piece_at(Square::G1).is_none());
}

#[test]
fn test_header_lookup_ignores_case() {
    let pgn = "[White \"Morphy\"]\n[black \"Duke\"]\n\n1. e4 *\n";
    let games = read_games(pgn.as_bytes()).unwrap();

    assert_eq!(games[0].header("white"), Some("Morphy"));
    assert_eq!(games[0].header("Black"), Some("Duke"));
    assert_eq!(games[0].header("Event"), None);
    assert_eq!(games[0].title(), "Morphy vs Duke");
}

#[test]
fn test_empty_collection_is_rejected() {
    assert!(GameCollection::new(Vec::new()).is_none());
}

#[test]
fn test_find_tag_takes_first_match() {
    let tags = vec![
        ("Event".to_string(), "Open".to_string()),
        ("EVENT".to_string(), "Second".to_string()),
    ];
    assert_eq!(find_tag(&tags, "event"), Some("Open"));
    assert_eq!(find_tag(&tags, "Site"), None);
}
