// Grid
pub const GRID_SIZE: i16 = 24;
pub const INITIAL_SNAKE_LENGTH: i16 = 3;

// Speed scaling
pub const MIN_TICK_MS: u64 = 70;
pub const SPEED_STEP_MS: u64 = 4;

// Frame loop
pub const MAX_FRAME_DELTA_MS: u64 = 250;
pub const FRAME_POLL_MS: u64 = 16;

// Storage
pub const APP_NAME: &str = "serpent";
pub const HIGH_SCORE_FILE: &str = "high_score.json";
pub const SETTINGS_FILE: &str = "settings.json";
pub const LOG_FILE: &str = "serpent.log";
pub const LOG_ENV_VAR: &str = "SERPENT_LOG";
