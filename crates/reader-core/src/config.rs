use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::params::{ParameterSet, DEFAULT_RATE, DEFAULT_WINDOW};

pub const QUALIFIER: &str = "com";
pub const ORGANIZATION: &str = "rsvp";
pub const APPLICATION: &str = "rsvp-reader";

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Config write error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    pub wpm: u32,
    pub window: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            wpm: DEFAULT_RATE,
            window: DEFAULT_WINDOW,
        }
    }
}

impl PlaybackConfig {
    pub fn params(&self) -> ParameterSet {
        ParameterSet::new(self.wpm, self.window)
    }

    pub fn store(&mut self, params: ParameterSet) {
        self.wpm = params.rate_wpm();
        self.window = params.window_chars();
    }
}

/// Color names are resolved by the UI; unknown names are ignored there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chunk_alt_fg: Option<String>,
}

pub fn config_root() -> Option<PathBuf> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).map(|p| p.config_dir().to_path_buf())
}

pub fn config_path() -> Option<PathBuf> {
    config_root().map(|dir| dir.join(CONFIG_FILE))
}

/// Reads `path`; a missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(err) => return Err(err.into()),
    };
    let mut config: Config = toml::from_str(&text)?;
    let params = config.playback.params();
    config.playback.store(params);
    Ok(config)
}

/// Loads the config at `path` (or the default location), falling back to
/// defaults with a warning when it cannot be read.
pub fn load_config(path: Option<&Path>) -> Config {
    let resolved = path.map(Path::to_path_buf).or_else(config_path);
    let Some(resolved) = resolved else {
        return Config::default();
    };
    match load_config_from(&resolved) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring {}: {}", resolved.display(), err);
            Config::default()
        }
    }
}

pub fn save_config_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(config)?;
    fs::write(path, text)?;
    Ok(())
}
