//! Loaded game records

use std::path::{Path, PathBuf};

use pgn_reader::{KnownOutcome, Outcome};
use shakmaty::{Chess, Color, Move, Position};

/// Recorded outcome of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    WhiteWins,
    BlackWins,
    Draw,
    Unknown,
}

impl GameResult {
    /// Parse a PGN result tag. Anything but the three decisive forms is unknown.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "1-0" => GameResult::WhiteWins,
            "0-1" => GameResult::BlackWins,
            "1/2-1/2" => GameResult::Draw,
            _ => GameResult::Unknown,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            GameResult::WhiteWins => "1-0",
            GameResult::BlackWins => "0-1",
            GameResult::Draw => "1/2-1/2",
            GameResult::Unknown => "*",
        }
    }

    /// Text announced when the final position is reached. Unknown results
    /// are not announced.
    pub fn announcement(&self) -> Option<&'static str> {
        match self {
            GameResult::WhiteWins => Some("White wins"),
            GameResult::BlackWins => Some("Black wins"),
            GameResult::Draw => Some("Draw"),
            GameResult::Unknown => None,
        }
    }
}

impl From<Outcome> for GameResult {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Known(KnownOutcome::Decisive { winner }) => match winner {
                Color::White => GameResult::WhiteWins,
                Color::Black => GameResult::BlackWins,
            },
            Outcome::Known(KnownOutcome::Draw) => GameResult::Draw,
            Outcome::Unknown => GameResult::Unknown,
        }
    }
}

/// A mainline move with its SAN as written in the file
#[derive(Debug, Clone)]
pub struct MoveRecord {
    pub mv: Move,
    pub san: String,
}

/// One game record. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Game {
    headers: Vec<(String, String)>,
    initial: Chess,
    moves: Vec<MoveRecord>,
    result: GameResult,
}

impl Game {
    /// Moves must be legal in sequence from `initial`.
    pub fn new(
        headers: Vec<(String, String)>,
        initial: Chess,
        moves: Vec<MoveRecord>,
        result: GameResult,
    ) -> Self {
        Self {
            headers,
            initial,
            moves,
            result,
        }
    }

    /// Header value by tag name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        find_tag(&self.headers, name)
    }

    pub fn initial_position(&self) -> &Chess {
        &self.initial
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// "White vs Black" from the player tags, `?` where missing
    pub fn title(&self) -> String {
        format!(
            "{} vs {}",
            self.header("White").unwrap_or("?"),
            self.header("Black").unwrap_or("?")
        )
    }

    /// Position after each prefix of the move list, starting with the
    /// initial position. The returned vector has `move_count() + 1` entries.
    pub fn positions(&self) -> Vec<Chess> {
        let mut positions = Vec::with_capacity(self.moves.len() + 1);
        let mut pos = self.initial.clone();
        positions.push(pos.clone());
        for record in &self.moves {
            pos.play_unchecked(record.mv);
            positions.push(pos.clone());
        }
        positions
    }
}

/// Value of the first tag named `name`, ignoring case
pub(crate) fn find_tag<'a>(tags: &'a [(String, String)], name: &str) -> Option<&'a str> {
    tags.iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

/// All games read from one file, in file order. Never empty.
#[derive(Debug, Clone)]
pub struct GameCollection {
    origin: Option<PathBuf>,
    games: Vec<Game>,
}

impl GameCollection {
    /// Returns `None` when there is nothing to view.
    pub fn new(games: Vec<Game>) -> Option<Self> {
        if games.is_empty() {
            return None;
        }
        Some(Self {
            origin: None,
            games,
        })
    }

    pub fn with_origin(mut self, path: impl Into<PathBuf>) -> Self {
        self.origin = Some(path.into());
        self
    }

    /// File the games were loaded from, if any
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn first(&self) -> &Game {
        &self.games[0]
    }

    pub fn as_slice(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, index: usize) -> Option<&Game> {
        self.games.get(index)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
