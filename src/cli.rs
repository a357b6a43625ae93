//! Command-line arguments.

use crate::game::Difficulty;
use crate::settings::{Settings, Theme};

/// What the binary should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Play(CliOverrides),
    Version,
    Help,
}

/// Settings given on the command line. `None` keeps the persisted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub difficulty: Option<Difficulty>,
    pub wrap_mode: Option<bool>,
    pub speed_scaling: Option<bool>,
    pub audio_enabled: Option<bool>,
    pub theme: Option<Theme>,
}

impl CliOverrides {
    pub fn apply(&self, settings: Settings) -> Settings {
        Settings {
            difficulty: self.difficulty.unwrap_or(settings.difficulty),
            wrap_mode: self.wrap_mode.unwrap_or(settings.wrap_mode),
            speed_scaling: self.speed_scaling.unwrap_or(settings.speed_scaling),
            audio_enabled: self.audio_enabled.unwrap_or(settings.audio_enabled),
            theme: self.theme.unwrap_or(settings.theme),
        }
    }
}

pub const HELP: &str = "\
Serpent - terminal snake

Usage: serpent [options]

Options:
  --difficulty <easy|normal|hard>  Base speed
  --wrap / --no-wrap               Edges wrap around instead of killing
  --no-speed-scaling               Keep the base speed as the score grows
  --mute                           Disable sound
  --light                          Light colour theme
  --version                        Show version information
  --help                           Show this help message

Keys:
  Arrows/WASD move   Space start/pause   R restart   Q/Esc quit
  1/2/3 difficulty   X wrap   V speed scaling   M sound   T theme";

/// Parse arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_ref() {
            "--version" | "-v" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--difficulty" | "-d" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--difficulty needs a value".to_string())?;
                overrides.difficulty = Some(parse_difficulty(value.as_ref())?);
            }
            "--wrap" => overrides.wrap_mode = Some(true),
            "--no-wrap" => overrides.wrap_mode = Some(false),
            "--no-speed-scaling" => overrides.speed_scaling = Some(false),
            "--mute" => overrides.audio_enabled = Some(false),
            "--light" => overrides.theme = Some(Theme::Light),
            other => {
                if let Some(value) = other.strip_prefix("--difficulty=") {
                    overrides.difficulty = Some(parse_difficulty(value)?);
                } else {
                    return Err(format!("Unknown option: {}", other));
                }
            }
        }
    }

    Ok(CliCommand::Play(overrides))
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    Difficulty::from_arg(value).ok_or_else(|| {
        format!(
            "Unknown difficulty '{}' (expected easy, normal or hard)",
            value
        )
    })
}
