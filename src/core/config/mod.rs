use std::{fmt, path::PathBuf, str::FromStr};

mod loader;
mod paths;

use crate::highlight::ColorMode;
use loader::ConfigLoader;
pub use paths::ConfigPaths;

pub const DEFAULT_HISTORY_SIZE: usize = 1000;

/// What an interrupt at the prompt does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPolicy {
    /// Drop the current input and draw a fresh prompt.
    #[default]
    Redraw,
    /// Treat the interrupt like any other read failure.
    Abort,
}

impl FromStr for InterruptPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "redraw" => Ok(InterruptPolicy::Redraw),
            "abort" => Ok(InterruptPolicy::Abort),
            other => Err(format!("expected redraw or abort, got '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub interrupt: InterruptPolicy,
    pub color: ColorMode,
    pub history_file: Option<PathBuf>,
    pub history_size: usize,
    pub banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interrupt: InterruptPolicy::default(),
            color: ColorMode::default(),
            history_file: None,
            history_size: DEFAULT_HISTORY_SIZE,
            banner: true,
        }
    }
}

impl Config {
    /// Defaults, then whatever the rc file at `paths` overrides.
    pub fn load(paths: &ConfigPaths) -> Result<Self, ConfigError> {
        let mut config = Config {
            history_file: paths.history_path.clone(),
            ..Config::default()
        };

        if let Some(rc_path) = &paths.rc_path {
            ConfigLoader::new(rc_path).load_into(&mut config)?;
        }
        Ok(config)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ConfigFileNotFound(PathBuf),
    InvalidValue {
        line: usize,
        key: String,
        message: String,
    },
    MalformedLine(usize),
    IoError(std::io::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConfigFileNotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            ConfigError::InvalidValue { line, key, message } => {
                write!(f, "line {}: invalid value for '{}': {}", line, key, message)
            }
            ConfigError::MalformedLine(line) => {
                write!(f, "line {}: expected 'key = value'", line)
            }
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}
