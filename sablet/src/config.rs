//! Configuration module for the sablet CLI.
//!
//! This module handles finding and loading configuration
//! settings for the sablet application.

use clap::ValueEnum;
use dirs::{config_dir, home_dir};
use num_cpus::get as get_num_cpus;
use sablec_lex::RecoveryPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, SabletError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "sablet.toml";

/// Job count used when the CPU count does not fit a `u32`.
const DEFAULT_THREAD_COUNT: u32 = 4;

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer settings.
    #[serde(default)]
    pub lex: LexConfig,

    /// Settings for `sablet check`.
    #[serde(default)]
    pub check: CheckConfig,
}

/// Lexer configuration options.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexConfig {
    /// What to do when an identifier contains an invalid character.
    #[serde(default)]
    pub recovery: RecoveryMode,

    /// Print line and column with every token.
    #[serde(default)]
    pub show_spans: bool,

    /// Warn when normalization rewrites an identifier.
    #[serde(default)]
    pub warn_normalized: bool,
}

/// Check-specific configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CheckConfig {
    /// Number of files lexed in parallel.
    #[serde(default = "default_parallel_jobs")]
    pub jobs: u32,
}

/// Recovery mode as spelled in `sablet.toml` and on the command line.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RecoveryMode {
    /// Stop at the first invalid identifier character.
    #[default]
    Abort,
    /// Report the error, skip the rest of the line and continue.
    SkipLine,
}

impl From<RecoveryMode> for RecoveryPolicy {
    fn from(mode: RecoveryMode) -> Self {
        match mode {
            RecoveryMode::Abort => RecoveryPolicy::Abort,
            RecoveryMode::SkipLine => RecoveryPolicy::SkipLine,
        }
    }
}

/// Get the default number of parallel jobs based on CPU count.
fn default_parallel_jobs() -> u32 {
    get_num_cpus().try_into().unwrap_or(DEFAULT_THREAD_COUNT)
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            jobs: default_parallel_jobs(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/sablet/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SabletError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| SabletError::Config(format!("Failed to parse configuration: {}", e)))?;

        if config.check.jobs == 0 {
            return Err(SabletError::Config(
                "check.jobs must be at least 1".to_string(),
            ));
        }

        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("sablet").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("sablet").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
