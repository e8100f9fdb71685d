//! Extension settings
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Environment variables: `PM_EXT_*` prefix
//!
//! Variables are taken from an [`EnvSource`], not read from the process
//! directly, so tests can pass a fixed set.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use tracing::level_filters::LevelFilter;

use crate::application::{ApplicationError, ApplicationResult};
use crate::infrastructure::traits::EnvSource;

/// Prefix of the variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "PM_EXT";

/// When to emit ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorChoice {
    /// Let `colored` decide (honors NO_COLOR, CLICOLOR, CLICOLOR_FORCE)
    #[default]
    Auto,
    Always,
    Never,
}

impl FromStr for ColorChoice {
    type Err = ApplicationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "always" => Ok(Self::Always),
            "never" => Ok(Self::Never),
            other => Err(ApplicationError::Config {
                message: format!("invalid color choice '{other}' (expected auto, always or never)"),
            }),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::Always => "always",
            Self::Never => "never",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Log level for stderr diagnostics (default: warn)
    pub log_level: String,
    /// Terminal color mode
    pub color: ColorChoice,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            color: ColorChoice::Auto,
        }
    }
}

impl Settings {
    /// Load settings from defaults and `PM_EXT_*` variables.
    ///
    /// Each setting falls back to its default on its own: an invalid value
    /// is reported in the returned errors and leaves the others untouched.
    pub fn load(env: &dyn EnvSource) -> (Self, Vec<ApplicationError>) {
        let vars: HashMap<String, String> = env.vars().into_iter().collect();

        let mut settings = Self::default();
        let mut errors = Vec::new();

        let config = match Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(Some(vars)),
            )
            .build()
        {
            Ok(config) => config,
            Err(e) => {
                errors.push(config_err(e));
                return (settings, errors);
            }
        };

        if let Ok(val) = config.get_string("log_level") {
            match parse_level(&val) {
                Ok(_) => settings.log_level = val,
                Err(e) => errors.push(e),
            }
        }
        if let Ok(val) = config.get_string("color") {
            match val.parse() {
                Ok(color) => settings.color = color,
                Err(e) => errors.push(e),
            }
        }

        (settings, errors)
    }

    /// Parse `log_level` into a tracing filter.
    pub fn level_filter(&self) -> ApplicationResult<LevelFilter> {
        parse_level(&self.log_level)
    }
}

fn parse_level(level: &str) -> ApplicationResult<LevelFilter> {
    level
        .parse::<LevelFilter>()
        .map_err(|e| ApplicationError::Config {
            message: format!("invalid log level '{level}': {e}"),
        })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
