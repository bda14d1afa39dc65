//! Command-line flags and persistent preferences for the status line caller.
//!
//! Preferences live in `<config dir>/cc-statusline/config.toml`. CLI flags always
//! take precedence over persisted values; a missing file is the same as an
//! empty one.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::theme::DEFAULT_THEME;

const APP_DIR: &str = "cc-statusline";
const CONFIG_FILE: &str = "config.toml";
pub const CONFIG_DIR_ENV: &str = "CC_STATUSLINE_CONFIG_DIR";
pub const THEME_ENV: &str = "CC_STATUSLINE_THEME";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "cc-statusline",
    about = "Render a themed status line from a JSON session snapshot on stdin",
    version
)]
pub struct AppConfig {
    /// Theme to render with (see --list-themes)
    #[arg(long = "theme", env = THEME_ENV)]
    pub theme: Option<String>,

    /// Print every registered theme with its description and exit
    #[arg(long = "list-themes", default_value_t = false)]
    pub list_themes: bool,

    /// Render a built-in sample snapshot instead of reading stdin
    #[arg(long = "demo", default_value_t = false)]
    pub demo: bool,

    /// Strip all color sequences from the output
    #[arg(long = "no-color", default_value_t = false)]
    pub no_color: bool,

    /// Write JSON debug traces to the trace log file
    #[arg(long = "logs", default_value_t = false)]
    pub logs: bool,

    /// Disable trace logging even when --logs is given
    #[arg(long = "no-logs", default_value_t = false)]
    pub no_logs: bool,

    /// Read preferences from this file instead of the default location
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
}

impl AppConfig {
    /// Preference file this run should read, if one can be located.
    #[must_use]
    pub fn user_config_path(&self) -> Option<PathBuf> {
        self.config.clone().or_else(config_file_path)
    }

    /// Theme name to try first: CLI or env, then the config file, then the default.
    #[must_use]
    pub fn requested_theme<'a>(&'a self, user: &'a UserConfig) -> &'a str {
        self.theme
            .as_deref()
            .or(user.theme.as_deref())
            .unwrap_or(DEFAULT_THEME)
    }

    /// Whether output should be stripped of color sequences.
    #[must_use]
    pub fn color_disabled(&self, user: &UserConfig) -> bool {
        self.no_color || user.no_color.unwrap_or(false)
    }
}

/// Persistent user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserConfig {
    pub theme: Option<String>,
    pub no_color: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "IO error: {msg}"),
            Self::Parse(msg) => write!(f, "TOML parse error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Resolve the preference directory, honoring `CC_STATUSLINE_CONFIG_DIR`.
#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

/// Resolve the full preference file path.
#[must_use]
pub fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Load preferences from `path`; a file that does not exist yields defaults.
pub fn load_user_config(path: &Path) -> Result<UserConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(contents) => parse_user_config(&contents),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(UserConfig::default()),
        Err(err) => Err(ConfigError::Io(format!("{}: {err}", path.display()))),
    }
}

/// Parse preferences from TOML text. Unknown keys are ignored.
pub fn parse_user_config(contents: &str) -> Result<UserConfig, ConfigError> {
    toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))
}
