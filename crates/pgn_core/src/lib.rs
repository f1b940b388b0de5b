//! Core of the PGN viewer
//!
//! This crate provides everything the viewer needs that does not touch a
//! window:
//! - Loading every game record from a PGN file
//! - Stepping through a game move by move, and on to the next game
//! - Describing the board as an 8x8 grid of squares ready to be drawn
//!
//! Chess rules and SAN resolution come from `shakmaty`, PGN tokenising from
//! `pgn-reader`.

pub mod error;
pub mod game;
pub mod loader;
pub mod render;
pub mod viewer;

pub use error::LoadError;
pub use game::{Game, GameCollection, GameResult, MoveRecord};
pub use loader::{load_games, read_games};
pub use render::{BoardGrid, PieceKey, Shade, SquareView, BOARD_SIZE, SQUARE_SIZE};
pub use viewer::{Transition, Viewer, ViewerEvent};
