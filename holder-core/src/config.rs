use std::env::{self, VarError};

use crate::ConfigError;
use crate::words::{DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT};

pub const MAX_ROUNDS_VAR: &str = "UNSCRAMBLE_MAX_ROUNDS";
pub const SCORE_INCREMENT_VAR: &str = "UNSCRAMBLE_SCORE_INCREMENT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of words played before the game ends.
    pub max_rounds: u32,
    /// Points awarded for each correct guess.
    pub score_increment: u32,
}

impl GameConfig {
    pub fn new(max_rounds: u32, score_increment: u32) -> Self {
        Self {
            max_rounds,
            score_increment,
        }
    }

    /// Read the config from the environment, falling back to the defaults
    /// for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            max_rounds: read_var(MAX_ROUNDS_VAR, DEFAULT_MAX_ROUNDS)?,
            score_increment: read_var(SCORE_INCREMENT_VAR, DEFAULT_SCORE_INCREMENT)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the values on their own. Pool-size checks happen when a session
    /// is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rounds == 0 {
            return Err(ConfigError::ZeroMaxRounds);
        }
        if self.score_increment == 0 {
            return Err(ConfigError::ZeroScoreIncrement);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ROUNDS, DEFAULT_SCORE_INCREMENT)
    }
}

fn read_var(name: &str, default: u32) -> Result<u32, ConfigError> {
    parse_var(name, env::var(name), default)
}

/// Unset means the default; a value that is not unicode or not a number is
/// an error.
fn parse_var(
    name: &str,
    value: Result<String, VarError>,
    default: u32,
) -> Result<u32, ConfigError> {
    let value = match value {
        Ok(value) => value,
        Err(VarError::NotPresent) => return Ok(default),
        Err(VarError::NotUnicode(raw)) => {
            return Err(ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value: raw.to_string_lossy().into_owned(),
            });
        }
    };

    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        })
}
