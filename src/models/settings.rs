use serde::Deserialize;

use super::null_as_default;

/// Sport a settings table belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SportType {
  #[default]
  Run,
  Ride,
  Swim,
}

impl SportType {
  pub fn from_name(name: &str) -> Option<Self> {
    match name.trim().to_lowercase().as_str() {
      "run" => Some(SportType::Run),
      "ride" => Some(SportType::Ride),
      "swim" => Some(SportType::Swim),
      _ => None,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SportType::Run => "Run",
      SportType::Ride => "Ride",
      SportType::Swim => "Swim",
    }
  }
}

/// Per-sport athlete thresholds and zone tables.
///
/// Zone `i` (1-based) covers `(boundaries[i - 2], boundaries[i - 1]]`. Both
/// boundary tables are expected to be ascending.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AthleteSportSettings {
  #[serde(rename = "max_hr", default, deserialize_with = "null_as_default")]
  pub maximum_heart_rate: i64,

  #[serde(rename = "lthr", default, deserialize_with = "null_as_default")]
  pub threshold_heart_rate: i64,

  /// Upper bpm bound of each heart-rate zone
  #[serde(rename = "hr_zones", default, deserialize_with = "null_as_default")]
  pub heart_rate_zone_boundaries: Vec<i64>,

  #[serde(rename = "hr_zone_names", default, deserialize_with = "null_as_default")]
  pub heart_rate_zone_names: Vec<String>,

  /// Threshold pace in m/s
  #[serde(default, deserialize_with = "null_as_default")]
  pub threshold_pace: f64,

  /// Upper bound of each pace zone as a percentage of `threshold_pace`, e.g. `77.5`
  #[serde(rename = "pace_zones", default, deserialize_with = "null_as_default")]
  pub pace_zone_boundaries: Vec<f64>,

  #[serde(default, deserialize_with = "null_as_default")]
  pub pace_zone_names: Vec<String>,
}
