use super::*;

#[test]
fn test_grid_has_rank_eight_on_top() {
    let grid = render(&Chess::default());

    let top_left = grid.at(0, 0).unwrap();
    assert_eq!(top_left.square, Square::A8);
    assert_eq!((top_left.x, top_left.y), (0, 0));

    let bottom_right = grid.at(7, 7).unwrap();
    assert_eq!(bottom_right.square, Square::H1);
    assert_eq!((bottom_right.x, bottom_right.y), (350, 350));
}

#[test]
fn test_shading_follows_parity() {
    let grid = render(&Chess::default());

    assert_eq!(grid.at(0, 0).unwrap().shade, Shade::Light);
    assert_eq!(grid.at(0, 1).unwrap().shade, Shade::Dark);
    assert_eq!(grid.at(7, 0).unwrap().shade, Shade::Dark);
    assert_eq!(grid.at(7, 7).unwrap().shade, Shade::Light);
}

#[test]
fn test_initial_pieces_are_placed() {
    let grid = render(&Chess::default());

    assert_eq!(grid.squares().len(), 64);
    assert_eq!(grid.pieces().count(), 32);

    let white_king = grid
        .pieces()
        .find(|view| view.piece == Some(PieceKey { color: Color::White, role: Role::King }))
        .unwrap();
    assert_eq!(white_king.square, Square::E1);
    assert_eq!((white_king.x, white_king.y), (200, 350));

    let black_queen = grid.at(0, 3).unwrap();
    assert_eq!(
        black_queen.piece,
        Some(PieceKey { color: Color::Black, role: Role::Queen })
    );
}

#[test]
fn test_rows_are_in_screen_order() {
    let grid = render(&Chess::default());
    let rows: Vec<&[SquareView]> = grid.rows().collect();

    assert_eq!(rows.len(), 8);
    assert!(rows.iter().all(|row| row.len() == 8));
    assert_eq!(rows[1][4].square, Square::E7);
}

#[test]
fn test_out_of_range_lookup() {
    let grid = render(&Chess::default());
    assert!(grid.at(8, 0).is_none());
    assert!(grid.at(0, 8).is_none());
}

#[test]
fn test_twelve_distinct_asset_names() {
    let names: std::collections::HashSet<String> =
        PieceKey::all().map(|key| key.asset_name()).collect();

    assert_eq!(names.len(), 12);
    assert!(names.contains("w_p.png"));
    assert!(names.contains("b_k.png"));
    assert!(names.contains("b_n.png"));
}
