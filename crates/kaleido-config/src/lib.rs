//! Configuration for the kaleido host binary.
//!
//! Only the host surface is configurable: how often frames are drawn and
//! where logs go. The pattern itself has no knobs.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "KALEIDO_CONFIG";

/// Frames per second used when the config file doesn't say.
pub const DEFAULT_FPS: u32 = 30;

/// Highest accepted frame rate.
pub const MAX_FPS: u32 = 120;

/// Errors raised while loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Host settings read from `config.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Target frame rate, clamped to `1..=MAX_FPS`.
    pub fps: u32,
    /// Default `tracing` filter directive; `RUST_LOG` wins when set.
    pub log_level: String,
    /// File to append logs to. Logging is off when unset since the
    /// terminal itself is the drawing surface.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Load from [`Config::path`], falling back to defaults when there is
    /// no config file.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// `$KALEIDO_CONFIG`, or `config.toml` in the platform config directory.
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        ProjectDirs::from("", "", "kaleido").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Effective frame rate.
    pub fn fps(&self) -> u32 {
        self.fps.clamp(1, MAX_FPS)
    }

    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.fps() as u64)
    }
}
