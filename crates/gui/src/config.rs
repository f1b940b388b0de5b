//! Optional settings file
//!
//! `pgn_viewer.toml` is looked up next to the executable, then in the
//! current directory. Every field may be omitted.
//!
//! ```toml
//! pieces_dir = "/usr/share/pgn_viewer/pieces"
//! light_square = "#eeeed2"
//! dark_square = "#769656"
//! log_filter = "pgn_core=debug,info"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use iced::Color;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::styles::Palette;

pub const CONFIG_FILE_NAME: &str = "pgn_viewer.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Directory holding the twelve piece images
    pub pieces_dir: Option<PathBuf>,
    pub light_square: String,
    pub dark_square: String,
    /// Used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            pieces_dir: None,
            light_square: "#f0d9b5".to_string(),
            dark_square: "#b58863".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Load the first settings file found, or defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let candidates = search_paths();
        match candidates.iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn palette(&self) -> Result<Palette, ConfigError> {
        Ok(Palette {
            light: parse_hex_color("light_square", &self.light_square)?,
            dark: parse_hex_color("dark_square", &self.dark_square)?,
        })
    }
}

fn search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(dir) = executable_dir() {
        paths.push(dir.join(CONFIG_FILE_NAME));
    }
    paths.push(PathBuf::from(CONFIG_FILE_NAME));
    paths
}

pub(crate) fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

fn parse_hex_color(field: &'static str, value: &str) -> Result<Color, ConfigError> {
    let invalid = || ConfigError::Color {
        field,
        value: value.to_string(),
    };

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16);

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Ok(r), Ok(g), Ok(b)) => Ok(Color::from_rgb8(r, g, b)),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
