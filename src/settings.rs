//! Player-facing configuration: difficulty, wrap mode, speed scaling, audio
//! and colour theme. Persisted as JSON next to the high score.

use crate::constants::SETTINGS_FILE;
use crate::game::Difficulty;
use crate::utils::persistence::{load_json, save_json};
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;

/// Colour palette for the terminal renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    /// Crossing an edge re-enters on the opposite side instead of ending the game.
    pub wrap_mode: bool,
    /// Tick interval shrinks as the score grows.
    pub speed_scaling: bool,
    pub audio_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            wrap_mode: false,
            speed_scaling: true,
            audio_enabled: true,
            theme: Theme::Dark,
        }
    }
}

/// Load settings from `dir`, falling back to defaults if the file is missing
/// or unreadable.
pub fn load_settings(dir: &Path) -> Settings {
    match load_json(&dir.join(SETTINGS_FILE)) {
        Ok(settings) => settings,
        Err(e) if e.kind() == io::ErrorKind::NotFound => Settings::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Unreadable settings file, using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(dir: &Path, settings: &Settings) -> io::Result<()> {
    save_json(&dir.join(SETTINGS_FILE), settings)
}
