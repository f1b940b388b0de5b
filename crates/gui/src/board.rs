//! Chess board widget rendering

use crate::assets::PieceImages;
use crate::styles::{self, Palette, SQUARE_SIZE};
use iced::widget::{column, container, image, row, Space};
use iced::{Element, Length};
use pgn_core::{BoardGrid, Shade, SquareView};

/// Renders a board grid with piece images
pub struct BoardView<'a> {
    grid: BoardGrid,
    pieces: &'a PieceImages,
    palette: Palette,
}

impl<'a> BoardView<'a> {
    pub fn new(grid: BoardGrid, pieces: &'a PieceImages, palette: Palette) -> Self {
        Self {
            grid,
            pieces,
            palette,
        }
    }

    /// Create the board view element
    pub fn view<Message: 'a>(&self) -> Element<'a, Message> {
        let mut board_column = column![].spacing(0);

        for squares in self.grid.rows() {
            let mut rank_row = row![].spacing(0);
            for square in squares {
                rank_row = rank_row.push(self.render_square(square));
            }
            board_column = board_column.push(rank_row);
        }

        container(board_column)
            .style(|_theme| container::Style {
                border: iced::Border {
                    color: styles::BOARD_BORDER,
                    width: 2.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    /// Render a single square
    fn render_square<Message: 'a>(&self, square: &SquareView) -> Element<'a, Message> {
        let bg_color = match square.shade {
            Shade::Light => self.palette.light,
            Shade::Dark => self.palette.dark,
        };

        let content: Element<'a, Message> =
            match square.piece.and_then(|key| self.pieces.get(key)) {
                Some(handle) => image(handle.clone())
                    .width(SQUARE_SIZE)
                    .height(SQUARE_SIZE)
                    .into(),
                None => Space::new(Length::Fixed(SQUARE_SIZE), Length::Fixed(SQUARE_SIZE)).into(),
            };

        container(content)
            .width(SQUARE_SIZE)
            .height(SQUARE_SIZE)
            .style(move |_theme| container::Style {
                background: Some(iced::Background::Color(bg_color)),
                ..Default::default()
            })
            .into()
    }
}
