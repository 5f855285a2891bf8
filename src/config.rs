// src/config.rs

use std::env;
use std::path::PathBuf;

/// Directory the recorder writes into.
pub const DEFAULT_RECORDINGS_DIR: &str = "/pool/skadecam";
/// Recognized recording extensions (all lowercase, no leading dot).
pub const RECORDING_EXTENSIONS: &[&str] = &["mp4"];
/// Player binary started for each matching file.
pub const DEFAULT_PLAYER: &str = "mpv";
/// Extra player argument for files recorded by the top camera.
pub const TOP_VIEW_ROTATION_ARG: &str = "--video-rotate=270";
/// Title shown above the selection menu.
pub const MENU_TITLE: &str = "  PLEASE SELECT A RECORDING TO PLAY::";
/// Lookback used when no positive day count is given.
pub const DEFAULT_LOOKBACK_DAYS: u32 = 2;
/// File names at or below this many characters are ignored.
pub const MIN_NAME_LEN: usize = 4;

/// Environment variable overriding the recordings directory.
pub const RECORDINGS_DIR_ENV: &str = "RECORDINGS_DIR";
/// Environment variable overriding the player binary.
pub const PLAYER_ENV: &str = "RECORDINGS_PLAYER";

/// Runtime settings for one picker run.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub recordings_dir: PathBuf,
    pub extensions: Vec<String>,
    pub player: String,
    pub top_view_args: Vec<String>,
    pub menu_title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            recordings_dir: PathBuf::from(DEFAULT_RECORDINGS_DIR),
            extensions: RECORDING_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            player: DEFAULT_PLAYER.to_string(),
            top_view_args: vec![TOP_VIEW_ROTATION_ARG.to_string()],
            menu_title: MENU_TITLE.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the defaults above, overridden by
    /// `RECORDINGS_DIR` and `RECORDINGS_PLAYER` when they are set.
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();
        if let Some(dir) = lookup(RECORDINGS_DIR_ENV).filter(|s| !s.trim().is_empty()) {
            config.recordings_dir = expand_path(&dir);
        }
        if let Some(player) = lookup(PLAYER_ENV).filter(|s| !s.trim().is_empty()) {
            config.player = player.trim().to_string();
        }
        config
    }

    /// Replaces the recordings directory, e.g. from a `--dir` flag.
    pub fn with_recordings_dir(mut self, dir: &str) -> Self {
        self.recordings_dir = expand_path(dir);
        self
    }
}

/// Expands `~` and environment variables; falls back to the literal string
/// if a referenced variable is missing.
pub fn expand_path(raw: &str) -> PathBuf {
    match shellexpand::full(raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(e) => {
            log::warn!("Could not expand '{}': {}. Using it as-is.", raw, e);
            PathBuf::from(shellexpand::tilde(raw).into_owned())
        }
    }
}
