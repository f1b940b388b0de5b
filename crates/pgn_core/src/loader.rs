//! PGN file loading
//!
//! Records are read one at a time until the stream is exhausted. Every SAN
//! token is resolved against the running position as it is read, so a
//! loaded [`Game`] only ever holds legal moves. The first malformed record
//! aborts the load; no partial collection is returned.
//!
//! Movetext tokens that are not SAN at all are dropped by the tokeniser
//! before they reach the visitor. A record with neither tags, moves nor a
//! result marker (plain prose between games) is not counted as a game.

use std::fs::File;
use std::io::Read;
use std::ops::ControlFlow;
use std::path::Path;

use pgn_reader::{Outcome, RawTag, Reader, SanPlus, Skip, Visitor};
use shakmaty::{fen::Fen, CastlingMode, Chess, Position};
use tracing::{info, warn};

use crate::error::LoadError;
use crate::game::{find_tag, Game, GameCollection, GameResult, MoveRecord};

/// Load every game in the file at `path`.
///
/// Fails with [`LoadError::NoGames`] when the file holds no game records.
pub fn load_games(path: impl AsRef<Path>) -> Result<GameCollection, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let games = read_games(file).map_err(|e| e.with_path(path))?;
    let collection = GameCollection::new(games).ok_or_else(|| LoadError::NoGames {
        origin: path.display().to_string(),
    })?;

    info!(path = %path.display(), games = collection.len(), "loaded PGN file");
    Ok(collection.with_origin(path))
}

/// Parse game records from `reader` until end of input.
pub fn read_games<R: Read>(reader: R) -> Result<Vec<Game>, LoadError> {
    let mut reader = Reader::new(reader);
    let mut visitor = GameVisitor;
    let mut games = Vec::new();

    while let Some(parsed) = reader.read_game(&mut visitor)? {
        match parsed {
            Ok(Some(game)) => games.push(game),
            Ok(None) => {}
            Err(message) => {
                let game = games.len() + 1;
                warn!(game, %message, "rejected game record");
                return Err(LoadError::Parse { game, message });
            }
        }
    }

    Ok(games)
}

/// Builds one [`Game`] per record. Side variations are skipped.
struct GameVisitor;

/// Mainline state while a record's movetext is being read
struct Movetext {
    headers: Vec<(String, String)>,
    initial: Chess,
    pos: Chess,
    moves: Vec<MoveRecord>,
    outcome: Option<GameResult>,
}

impl Movetext {
    /// `None` when the record carries nothing a game is made of.
    fn finish(self) -> Option<Game> {
        if self.headers.is_empty() && self.moves.is_empty() && self.outcome.is_none() {
            return None;
        }

        // The Result header wins over the movetext terminator.
        let result = find_tag(&self.headers, "Result")
            .map(GameResult::from_tag)
            .or(self.outcome)
            .unwrap_or(GameResult::Unknown);

        Some(Game::new(self.headers, self.initial, self.moves, result))
    }
}

impl Visitor for GameVisitor {
    type Tags = Vec<(String, String)>;
    type Movetext = Movetext;
    type Output = Result<Option<Game>, String>;

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Continue(Vec::with_capacity(10))
    }

    fn tag(
        &mut self,
        tags: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let key = match String::from_utf8(key.to_vec()) {
            Ok(key) => key,
            Err(_) => return ControlFlow::Break(Err("tag name is not valid UTF-8".to_string())),
        };
        match String::from_utf8(value.as_bytes().to_vec()) {
            Ok(value) => {
                tags.push((key, value));
                ControlFlow::Continue(())
            }
            Err(_) => ControlFlow::Break(Err(format!("value of tag {} is not valid UTF-8", key))),
        }
    }

    fn begin_movetext(&mut self, tags: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        match starting_position(&tags) {
            Ok(initial) => ControlFlow::Continue(Movetext {
                headers: tags,
                pos: initial.clone(),
                initial,
                moves: Vec::new(),
                outcome: None,
            }),
            Err(message) => ControlFlow::Break(Err(message)),
        }
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        match san_plus.san.to_move(&movetext.pos) {
            Ok(mv) => {
                movetext.pos.play_unchecked(mv);
                movetext.moves.push(MoveRecord {
                    mv,
                    san: san_plus.to_string(),
                });
                ControlFlow::Continue(())
            }
            Err(err) => ControlFlow::Break(Err(format!(
                "illegal move {} at ply {}: {}",
                san_plus,
                movetext.moves.len() + 1,
                err
            ))),
        }
    }

    fn begin_variation(&mut self, _movetext: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn outcome(&mut self, movetext: &mut Self::Movetext, outcome: Outcome) -> ControlFlow<Self::Output> {
        movetext.outcome = Some(GameResult::from(outcome));
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        Ok(movetext.finish())
    }
}

/// Standard starting position, or the one given by a `FEN` header.
fn starting_position(tags: &[(String, String)]) -> Result<Chess, String> {
    let Some(fen) = find_tag(tags, "FEN") else {
        return Ok(Chess::default());
    };

    let castling_mode = match find_tag(tags, "Variant") {
        Some(variant) if variant.eq_ignore_ascii_case("chess960") => CastlingMode::Chess960,
        _ => CastlingMode::Standard,
    };

    let fen: Fen = fen
        .parse()
        .map_err(|e| format!("failed to parse FEN: {}", e))?;
    fen.into_position(castling_mode)
        .map_err(|e| format!("invalid FEN position: {}", e))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
