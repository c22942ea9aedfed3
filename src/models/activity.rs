use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::null_as_default;

/// The parts of a Strava activity the sync reads
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StravaActivity {
  #[serde(default, deserialize_with = "null_as_default")]
  pub description: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(default, deserialize_with = "null_as_default")]
  pub sport_type: String,
  pub start_date: DateTime<Utc>,
  /// Wall-clock start, encoded by Strava with a `Z` suffix
  pub start_date_local: DateTime<Utc>,
}

/// Training log copy of an uploaded activity
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LinkedActivity {
  #[serde(default, deserialize_with = "null_as_default")]
  pub strava_id: String,
  /// Id of the planned workout the log paired this activity with
  #[serde(default)]
  pub paired_event_id: Option<i64>,
  pub start_date: DateTime<Utc>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub distance: f64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub moving_time: f64,
}
