//! Game stepping state machine
//!
//! A [`Viewer`] owns a loaded [`GameCollection`] and tracks which game and
//! which move of that game is on display. Input sources never call the
//! transitions directly; they send a [`ViewerEvent`] through
//! [`Viewer::dispatch`].

use shakmaty::Chess;
use tracing::debug;

use crate::game::{Game, GameCollection, GameResult};
use crate::render::{self, BoardGrid};

/// Discrete input understood by the viewer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerEvent {
    Advance,
    Retreat,
    NextGame,
}

/// What a dispatched event did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The event was not valid in the current state. Nothing changed.
    Ignored,
    /// The move index changed but the game is not at its final position.
    Moved,
    /// The final position of the game was just reached by advancing.
    Finished(GameResult),
    /// A new game is on display at its initial position.
    GameChanged { index: usize },
}

/// Per-game display state, rebuilt whenever another game becomes active
#[derive(Debug, Clone)]
struct ViewerState {
    game_index: usize,
    move_index: usize,
    /// `positions[i]` is the board after the first `i` moves.
    positions: Vec<Chess>,
}

impl ViewerState {
    fn start(game: &Game, game_index: usize) -> Self {
        Self {
            game_index,
            move_index: 0,
            positions: game.positions(),
        }
    }

    fn move_count(&self) -> usize {
        self.positions.len() - 1
    }
}

#[derive(Debug, Clone)]
pub struct Viewer {
    games: GameCollection,
    state: ViewerState,
}

impl Viewer {
    /// Show the first game of `games` at its initial position.
    pub fn new(games: GameCollection) -> Self {
        let state = ViewerState::start(games.first(), 0);
        Self { games, state }
    }

    /// Apply one input event.
    pub fn dispatch(&mut self, event: ViewerEvent) -> Transition {
        let transition = match event {
            ViewerEvent::Advance => self.advance(),
            ViewerEvent::Retreat => self.retreat(),
            ViewerEvent::NextGame => self.next_game(),
        };
        debug!(
            ?event,
            ?transition,
            game = self.state.game_index,
            ply = self.state.move_index,
            "viewer transition"
        );
        transition
    }

    fn advance(&mut self) -> Transition {
        if !self.can_advance() {
            return Transition::Ignored;
        }
        self.state.move_index += 1;
        if self.is_finished() {
            Transition::Finished(self.game().result())
        } else {
            Transition::Moved
        }
    }

    fn retreat(&mut self) -> Transition {
        if !self.can_retreat() {
            return Transition::Ignored;
        }
        self.state.move_index -= 1;
        Transition::Moved
    }

    fn next_game(&mut self) -> Transition {
        if !self.can_next_game() {
            return Transition::Ignored;
        }
        let index = self.state.game_index + 1;
        let Some(game) = self.games.get(index) else {
            return Transition::Ignored;
        };
        self.state = ViewerState::start(game, index);
        Transition::GameChanged { index }
    }

    pub fn can_advance(&self) -> bool {
        self.state.move_index < self.state.move_count()
    }

    pub fn can_retreat(&self) -> bool {
        self.state.move_index > 0
    }

    /// Only once the current game is finished, and only if another follows.
    pub fn can_next_game(&self) -> bool {
        self.is_finished() && self.state.game_index + 1 < self.games.len()
    }

    pub fn is_finished(&self) -> bool {
        self.state.move_index == self.state.move_count()
    }

    pub fn games(&self) -> &GameCollection {
        &self.games
    }

    pub fn game(&self) -> &Game {
        // game_index is only ever set from a successful lookup
        &self.games.as_slice()[self.state.game_index]
    }

    pub fn game_index(&self) -> usize {
        self.state.game_index
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn move_index(&self) -> usize {
        self.state.move_index
    }

    pub fn move_count(&self) -> usize {
        self.state.move_count()
    }

    /// Board after `move_index()` moves of the current game
    pub fn position(&self) -> &Chess {
        &self.state.positions[self.state.move_index]
    }

    /// SAN of the move that produced the current position
    pub fn last_move_san(&self) -> Option<&str> {
        let index = self.state.move_index.checked_sub(1)?;
        self.game().moves().get(index).map(|record| record.san.as_str())
    }

    pub fn render(&self) -> BoardGrid {
        render::render(self.position())
    }
}

#[cfg(test)]
#[path = "viewer_tests.rs"]
mod viewer_tests;
