use std::env;
use std::fmt;

use crate::models::SportType;

/// ---------------------------------------------------------------------------
/// Configuration Constants
/// ---------------------------------------------------------------------------

pub const DEFAULT_SUMMARY_SEPARATOR: &str = "---Workout Summary---";
const DEFAULT_WINDOW_MINUTES: i64 = 60;
const MAX_WINDOW_MINUTES: i64 = 24 * 60;
const DEFAULT_MATCH_TOLERANCE: f64 = 0.05;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
  #[error("Missing configuration: {0}")]
  Missing(String),

  #[error("Invalid value for {name}: {value}")]
  Invalid { name: String, value: String },
}

/// ---------------------------------------------------------------------------
/// Sync Configuration
/// ---------------------------------------------------------------------------

/// Built once at startup and handed to `SyncService`
#[derive(Clone)]
pub struct SyncConfig {
  pub intervals_athlete_id: String,
  pub intervals_api_key: String,
  pub sport: SportType,
  pub summary_separator: String,
  /// Half-width of the search window around the activity start
  pub activity_window_minutes: i64,
  /// Relative tolerance for matching a workout the log did not pair
  pub match_tolerance: f64,
}

impl SyncConfig {
  pub fn new(intervals_athlete_id: impl Into<String>, intervals_api_key: impl Into<String>) -> Self {
    Self {
      intervals_athlete_id: intervals_athlete_id.into(),
      intervals_api_key: intervals_api_key.into(),
      sport: SportType::default(),
      summary_separator: DEFAULT_SUMMARY_SEPARATOR.to_string(),
      activity_window_minutes: DEFAULT_WINDOW_MINUTES,
      match_tolerance: DEFAULT_MATCH_TOLERANCE,
    }
  }

  /// Load `.env` if present, then read the environment
  pub fn load() -> Result<Self, ConfigError> {
    dotenvy::dotenv().ok();
    Self::from_env()
  }

  pub fn from_env() -> Result<Self, ConfigError> {
    let mut config = Self::new(required("INTERVALS_ATHLETE_ID")?, required("INTERVALS_API_KEY")?);

    if let Some(sport) = optional("WORKOUT_SUMMARY_SPORT") {
      config.sport = SportType::from_name(&sport).ok_or_else(|| ConfigError::Invalid {
        name: "WORKOUT_SUMMARY_SPORT".into(),
        value: sport.clone(),
      })?;
    }
    if let Some(separator) = optional("WORKOUT_SUMMARY_SEPARATOR") {
      config.summary_separator = separator;
    }
    if let Some(minutes) = optional("WORKOUT_SUMMARY_WINDOW_MINUTES") {
      let parsed: i64 = parse("WORKOUT_SUMMARY_WINDOW_MINUTES", &minutes)?;
      if !(1..=MAX_WINDOW_MINUTES).contains(&parsed) {
        return Err(ConfigError::Invalid {
          name: "WORKOUT_SUMMARY_WINDOW_MINUTES".into(),
          value: minutes,
        });
      }
      config.activity_window_minutes = parsed;
    }
    if let Some(tolerance) = optional("WORKOUT_SUMMARY_MATCH_TOLERANCE") {
      config.match_tolerance = parse("WORKOUT_SUMMARY_MATCH_TOLERANCE", &tolerance)?;
    }

    Ok(config)
  }
}

impl fmt::Debug for SyncConfig {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("SyncConfig")
      .field("intervals_athlete_id", &self.intervals_athlete_id)
      .field("intervals_api_key", &"<redacted>")
      .field("sport", &self.sport)
      .field("summary_separator", &self.summary_separator)
      .field("activity_window_minutes", &self.activity_window_minutes)
      .field("match_tolerance", &self.match_tolerance)
      .finish()
  }
}

fn required(name: &str) -> Result<String, ConfigError> {
  env::var(name).map_err(|_| ConfigError::Missing(name.into()))
}

fn optional(name: &str) -> Option<String> {
  env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
  value.trim().parse().map_err(|_| ConfigError::Invalid {
    name: name.into(),
    value: value.into(),
  })
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
