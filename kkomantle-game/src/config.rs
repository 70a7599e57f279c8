//! Companion configuration
use crate::calendar::PuzzleCalendar;
use crate::constants::{DAYS_PATH, EPOCH_RFC3339, NUM_PUZZLES, SITE_URL};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid epoch {value:?}: {source}")]
    Epoch {
        value: String,
        source: chrono::ParseError,
    },
    #[error("Puzzle count must be positive")]
    NoPuzzles,
}

/// Tunables for the calendar, share text and day directory endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub epoch: DateTime<FixedOffset>,
    pub num_puzzles: u32,
    pub site_url: String,
    pub days_path: String,
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            num_puzzles: NUM_PUZZLES,
            site_url: SITE_URL.to_string(),
            days_path: DAYS_PATH.to_string(),
        }
    }
}

fn default_epoch() -> DateTime<FixedOffset> {
    // The constant is a literal; a parse failure is a build-time typo.
    DateTime::parse_from_rfc3339(EPOCH_RFC3339).unwrap_or_default()
}

impl CompanionConfig {
    /// Parse an override document. Fields it omits keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or describes an empty calendar.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Override the epoch from RFC 3339 text.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not RFC 3339 with an offset.
    pub fn with_epoch_str(mut self, value: &str) -> Result<Self, ConfigError> {
        self.epoch = DateTime::parse_from_rfc3339(value).map_err(|source| ConfigError::Epoch {
            value: value.to_string(),
            source,
        })?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::NoPuzzles`] when `num_puzzles` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_puzzles == 0 {
            return Err(ConfigError::NoPuzzles);
        }
        Ok(())
    }

    #[must_use]
    pub fn calendar(&self) -> PuzzleCalendar {
        PuzzleCalendar::new(self.epoch, self.num_puzzles)
    }
}
