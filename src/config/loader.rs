//! Configuration file loading with precedence handling.

use crate::model::{ItemSpec, LoopMode, TargetKind};
use crate::state::{TickerSettings, MAX_SPEED};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 240;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Config file path contains invalid UTF-8 or cannot be resolved.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown fields.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A setting is outside its accepted range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Setting name as written in the config file.
        field: &'static str,
        /// What is wrong with it.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/marquee/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Frames per second.
    #[serde(default)]
    pub fps: Option<u32>,

    /// Cells moved per frame.
    #[serde(default)]
    pub speed: Option<i32>,

    /// Default resting position.
    #[serde(default)]
    pub target: Option<TargetKind>,

    /// Default loop behaviour.
    #[serde(default)]
    pub loop_mode: Option<LoopMode>,

    /// Respawn items once all have exited.
    #[serde(default)]
    pub cycle: Option<bool>,

    /// Row of the first stacked item.
    #[serde(default)]
    pub top: Option<u16>,

    /// Blank rows between stacked items.
    #[serde(default)]
    pub row_gap: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Ticker items, used when no file or stdin input is given.
    #[serde(default)]
    pub items: Option<Vec<ItemSpec>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Frames per second.
    pub fps: u32,
    /// Cells moved per frame.
    pub speed: i32,
    /// Default resting position.
    pub target: TargetKind,
    /// Default loop behaviour.
    pub loop_mode: LoopMode,
    /// Respawn items once all have exited.
    pub cycle: bool,
    /// Row of the first stacked item.
    pub top: u16,
    /// Blank rows between stacked items.
    pub row_gap: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Items from the config file.
    pub items: Vec<ItemSpec>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            fps: 20,
            speed: 2,
            target: TargetKind::Centered,
            loop_mode: LoopMode::Auto,
            cycle: false,
            top: 1,
            row_gap: 1,
            log_file_path: default_log_path(),
            items: Vec::new(),
        }
    }
}

impl ResolvedConfig {
    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.fps.max(1)))
    }

    /// Defaults handed to the ticker state.
    pub fn ticker_settings(&self) -> TickerSettings {
        TickerSettings {
            speed: self.speed,
            target: self.target,
            loop_mode: self.loop_mode,
            cycle: self.cycle,
            top: self.top,
            row_gap: self.row_gap,
        }
    }
}

/// Overrides taken from command-line flags. `None` leaves the value alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--fps`
    pub fps: Option<u32>,
    /// `--speed`
    pub speed: Option<i32>,
    /// `--target`
    pub target: Option<TargetKind>,
    /// `--loop-mode`
    pub loop_mode: Option<LoopMode>,
    /// `--cycle` (only when given)
    pub cycle: Option<bool>,
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/marquee/marquee.log` on Linux, or the
/// platform's state directory elsewhere. Falls back to the current
/// directory when no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("marquee").join("marquee.log")
    } else {
        PathBuf::from("marquee.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/marquee/config.toml` on Linux, the platform's config
/// directory elsewhere, or `None` if it cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("marquee").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MARQUEE_CONFIG` environment variable
/// 3. Default path `~/.config/marquee/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("MARQUEE_CONFIG") {
        if env_path.is_empty() {
            return Err(ConfigError::InvalidPath(
                "MARQUEE_CONFIG is set but empty".to_string(),
            ));
        }
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        fps: config.fps.unwrap_or(defaults.fps),
        speed: config.speed.unwrap_or(defaults.speed),
        target: config.target.unwrap_or(defaults.target),
        loop_mode: config.loop_mode.unwrap_or(defaults.loop_mode),
        cycle: config.cycle.unwrap_or(defaults.cycle),
        top: config.top.unwrap_or(defaults.top),
        row_gap: config.row_gap.unwrap_or(defaults.row_gap),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        items: config.items.unwrap_or(defaults.items),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MARQUEE_FPS`: Override frame rate
/// - `MARQUEE_SPEED`: Override speed
///
/// Values that do not parse as numbers are ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(fps) = env_number("MARQUEE_FPS") {
        config.fps = fps;
    }

    if let Some(speed) = env_number("MARQUEE_SPEED") {
        config.speed = speed;
    }

    config
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok()?.trim().parse().ok()
}

/// Apply CLI argument overrides to resolved config.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, overrides: CliOverrides) -> ResolvedConfig {
    if let Some(fps) = overrides.fps {
        config.fps = fps;
    }

    if let Some(speed) = overrides.speed {
        config.speed = speed;
    }

    if let Some(target) = overrides.target {
        config.target = target;
    }

    if let Some(loop_mode) = overrides.loop_mode {
        config.loop_mode = loop_mode;
    }

    if let Some(cycle) = overrides.cycle {
        config.cycle = cycle;
    }

    config
}

/// Check ranges once every source has been applied.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for a zero or excessive frame rate,
/// or a speed outside `1..=MAX_SPEED` (global or per item).
pub fn validate(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if config.fps == 0 || config.fps > MAX_FPS {
        return Err(ConfigError::InvalidValue {
            field: "fps",
            reason: format!("must be between 1 and {MAX_FPS}, got {}", config.fps),
        });
    }

    if !(1..=MAX_SPEED).contains(&config.speed) {
        return Err(ConfigError::InvalidValue {
            field: "speed",
            reason: format!("must be between 1 and {MAX_SPEED}, got {}", config.speed),
        });
    }

    if let Some((index, speed)) = config
        .items
        .iter()
        .enumerate()
        .find_map(|(i, item)| {
            item.speed
                .filter(|s| !(1..=MAX_SPEED).contains(s))
                .map(|s| (i, s))
        })
    {
        return Err(ConfigError::InvalidValue {
            field: "items.speed",
            reason: format!("item {index} speed must be between 1 and {MAX_SPEED}, got {speed}"),
        });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
