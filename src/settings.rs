//! Configure flyout.
use crate::core::outside::{self, Document};
use crate::core::renderer::{DEFAULT_TEXT_SIZE, Headless};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use std::path::{Path, PathBuf};

/// The settings shared by every overlay of an application.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct Settings {
    /// The interactions that dismiss open overlays.
    pub outside: outside::Settings,

    /// The text size used when a widget does not specify one.
    ///
    /// By default, it is 16.0.
    pub default_text_size: f32,
}

impl Settings {
    /// Loads [`Settings`] from a file.
    ///
    /// Only RON files (`.ron` extension) are supported, and only with the
    /// `serde` feature enabled.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap_or_default();

        let settings = match extension {
            "ron" => load_ron(path)?,
            _ => return Err(Error::UnsupportedFormat(extension.to_owned())),
        };

        log::debug!("Loaded settings from {}: {settings:?}", path.display());

        Ok(settings)
    }

    /// Parses [`Settings`] from RON.
    ///
    /// Missing fields keep their default value.
    #[cfg(feature = "serde")]
    pub fn from_ron(content: &str) -> Result<Self, Error> {
        ron::from_str(content).map_err(|error| Error::Parse(error.to_string()))
    }

    /// Creates a new [`Document`] dispatching outside presses with these
    /// [`Settings`].
    pub fn document(&self) -> Document {
        Document::with_settings(self.outside)
    }

    /// Creates a new [`Headless`] renderer with these [`Settings`].
    pub fn renderer(&self) -> Headless {
        Headless::with_text_size(self.default_text_size)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            outside: outside::Settings::default(),
            default_text_size: DEFAULT_TEXT_SIZE,
        }
    }
}

#[cfg(feature = "serde")]
fn load_ron(path: &Path) -> Result<Settings, Error> {
    let content = std::fs::read_to_string(path)?;

    Settings::from_ron(&content)
}

#[cfg(not(feature = "serde"))]
fn load_ron(_path: &Path) -> Result<Settings, Error> {
    Err(Error::UnsupportedFormat(
        "RON loading requires the 'serde' feature".to_owned(),
    ))
}

/// An error produced while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The settings file does not exist.
    #[error("settings file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file could not be read.
    #[error("failed to read settings: {0}")]
    Read(#[from] std::io::Error),

    /// The settings file is not valid.
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// The format of the settings file is not supported.
    #[error("unsupported settings format: {0:?}")]
    UnsupportedFormat(String),
}
