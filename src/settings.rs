//! Game settings and preferences
//!
//! Only presentation and pacing live here; board size and physics are
//! compile-time constants in [`crate::consts`].

use std::{fs, io, path::Path, time::Duration};

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TICK_MS, MAX_TICK_MS};
use crate::error::PongError;

/// Text drawn for each kind of board element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Glyphs {
    pub wall: String,
    pub paddle: String,
    pub ball: String,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            wall: "#".to_string(),
            paddle: "|".to_string(),
            ball: "o".to_string(),
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Input poll timeout in milliseconds; this is the tick period
    pub tick_ms: u64,
    pub glyphs: Glyphs,
    /// Print the key legend under the board
    pub show_controls: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: DEFAULT_TICK_MS,
            glyphs: Glyphs::default(),
            show_controls: true,
        }
    }
}

impl Settings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Parse settings from JSON text; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, PongError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, PongError> {
        let json = fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings if a file is given and exists, else fall back to defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, PongError> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };
        match Self::load(path) {
            Err(PongError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("Settings file {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            result => result,
        }
    }

    pub fn validate(&self) -> Result<(), PongError> {
        if self.tick_ms == 0 || self.tick_ms > MAX_TICK_MS {
            return Err(PongError::InvalidSettings(format!(
                "tick_ms must be between 1 and {MAX_TICK_MS}"
            )));
        }
        for (name, glyph) in [
            ("wall", &self.glyphs.wall),
            ("paddle", &self.glyphs.paddle),
            ("ball", &self.glyphs.ball),
        ] {
            if glyph.is_empty() {
                return Err(PongError::InvalidSettings(format!(
                    "{name} glyph must not be empty"
                )));
            }
        }
        Ok(())
    }
}
