//! Board grid description
//!
//! Turns a position into the 64 squares a front end has to paint, in
//! screen order: row 0 is rank 8, column 0 is the a-file.

use shakmaty::{Chess, Color, File, Position, Rank, Role, Square};

/// Edge length of one square
pub const SQUARE_SIZE: u32 = 50;
/// Edge length of the whole board
pub const BOARD_SIZE: u32 = SQUARE_SIZE * 8;

const COLORS: [Color; 2] = [Color::White, Color::Black];
const ROLES: [Role; 6] = [
    Role::Pawn,
    Role::Rook,
    Role::Knight,
    Role::Bishop,
    Role::Queen,
    Role::King,
];

/// Which piece image to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceKey {
    pub color: Color,
    pub role: Role,
}

impl PieceKey {
    /// The twelve (color, role) combinations
    pub fn all() -> impl Iterator<Item = PieceKey> {
        COLORS
            .into_iter()
            .flat_map(|color| ROLES.into_iter().map(move |role| PieceKey { color, role }))
    }

    /// Image file name, e.g. `w_p.png` or `b_k.png`
    pub fn asset_name(&self) -> String {
        let color = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let role = match self.role {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };
        format!("{}_{}.png", color, role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Light,
    Dark,
}

/// One square as it appears on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareView {
    pub square: Square,
    pub row: usize,
    pub col: usize,
    /// Pixel offset of the top-left corner
    pub x: u32,
    pub y: u32,
    pub shade: Shade,
    pub piece: Option<PieceKey>,
}

/// All 64 squares, row-major from the top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGrid {
    squares: Vec<SquareView>,
}

impl BoardGrid {
    pub fn rows(&self) -> impl Iterator<Item = &[SquareView]> {
        self.squares.chunks(8)
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&SquareView> {
        if row >= 8 || col >= 8 {
            return None;
        }
        self.squares.get(row * 8 + col)
    }

    pub fn squares(&self) -> &[SquareView] {
        &self.squares
    }

    /// Squares that carry a piece
    pub fn pieces(&self) -> impl Iterator<Item = &SquareView> {
        self.squares.iter().filter(|view| view.piece.is_some())
    }
}

/// Describe `position` as a screen grid with rank 8 at the top.
pub fn render(position: &Chess) -> BoardGrid {
    let board = position.board();
    let mut squares = Vec::with_capacity(64);

    for row in 0..8 {
        for col in 0..8 {
            let square = Square::from_coords(File::new(col as u32), Rank::new(7 - row as u32));
            let shade = if (row + col) % 2 == 0 {
                Shade::Light
            } else {
                Shade::Dark
            };
            let piece = board.piece_at(square).map(|piece| PieceKey {
                color: piece.color,
                role: piece.role,
            });

            squares.push(SquareView {
                square,
                row,
                col,
                x: col as u32 * SQUARE_SIZE,
                y: row as u32 * SQUARE_SIZE,
                shade,
                piece,
            });
        }
    }

    BoardGrid { squares }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
