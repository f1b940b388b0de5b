//! Styling constants and theme configuration

use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(0.94, 0.85, 0.71); // #f0d9b5
pub const DARK_SQUARE: Color = Color::from_rgb(0.71, 0.53, 0.39); // #b58863
pub const BOARD_BORDER: Color = Color::from_rgb(0.3, 0.3, 0.3);

// Dialog backdrop
pub const BACKDROP: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.8);
pub const ERROR_TEXT: Color = Color::from_rgb(0.95, 0.4, 0.4);

// Dimensions
pub const SQUARE_SIZE: f32 = pgn_core::SQUARE_SIZE as f32;
pub const BOARD_SIZE: f32 = pgn_core::BOARD_SIZE as f32;
pub const PANEL_WIDTH: f32 = 260.0;
pub const WINDOW_SIZE: (f32, f32) = (760.0, 480.0);

/// Light and dark square colors in use
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub light: Color,
    pub dark: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: LIGHT_SQUARE,
            dark: DARK_SQUARE,
        }
    }
}
