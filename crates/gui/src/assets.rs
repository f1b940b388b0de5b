//! Piece images, decoded once at startup

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::RgbaImage;
use pgn_core::{PieceKey, SQUARE_SIZE};
use tracing::{debug, info};

use crate::config::executable_dir;
use crate::error::AssetError;

const PIECES_DIR_NAME: &str = "pieces";

/// One image handle per (color, role). Handles are reference counted, so
/// cloning them into widgets is cheap.
#[derive(Debug, Clone, Default)]
pub struct PieceImages {
    handles: HashMap<PieceKey, Handle>,
}

impl PieceImages {
    /// Decode all twelve images in `dir`, scaled to one square.
    pub fn load(dir: &Path) -> Result<Self, AssetError> {
        let mut handles = HashMap::with_capacity(12);

        for key in PieceKey::all() {
            let path = dir.join(key.asset_name());
            let scaled = load_scaled(&path)?;
            let (width, height) = scaled.dimensions();
            handles.insert(key, Handle::from_rgba(width, height, scaled.into_raw()));
        }

        info!(dir = %dir.display(), "loaded piece images");
        Ok(Self { handles })
    }

    pub fn get(&self, key: PieceKey) -> Option<&Handle> {
        self.handles.get(&key)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }
}

fn load_scaled(path: &Path) -> Result<RgbaImage, AssetError> {
    if !path.is_file() {
        return Err(AssetError::Missing {
            path: path.to_path_buf(),
        });
    }
    let decoded = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), width = decoded.width(), height = decoded.height(), "decoded piece image");

    Ok(decoded
        .resize_exact(SQUARE_SIZE, SQUARE_SIZE, FilterType::Lanczos3)
        .to_rgba8())
}

/// Pick the piece directory: the configured one, else `pieces/` next to the
/// executable, else the one shipped in the crate.
pub fn locate_pieces_dir(configured: Option<&Path>) -> Result<PathBuf, AssetError> {
    let mut searched = Vec::new();
    if let Some(dir) = configured {
        searched.push(dir.to_path_buf());
    }
    if let Some(dir) = executable_dir() {
        searched.push(dir.join(PIECES_DIR_NAME));
    }
    searched.push(Path::new(env!("CARGO_MANIFEST_DIR")).join(PIECES_DIR_NAME));

    match searched.iter().find(|dir| dir.is_dir()) {
        Some(dir) => Ok(dir.clone()),
        None => Err(AssetError::DirectoryNotFound { searched }),
    }
}

#[cfg(test)]
#[path = "assets_tests.rs"]
mod assets_tests;
