//! Heart rate and pace zone classification against an athlete's zone tables
//!
//! Percentage targets are turned into absolute values (bpm, min/km) for the
//! detail text and matched against the ascending boundary tables from
//! `AthleteSportSettings`.

use std::fmt;

use tracing::warn;

use crate::format::clock;
use crate::models::{AthleteSportSettings, HeartRateUnits, PaceUnits, Target, TargetValue};

/// ---------------------------------------------------------------------------
/// Zone Labels
/// ---------------------------------------------------------------------------

/// One zone (`Z3`) or a span of zones (`Z2-Z3`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSpan {
  pub start: u32,
  pub end: u32,
}

impl ZoneSpan {
  pub fn single(zone: u32) -> Self {
    Self {
      start: zone,
      end: zone,
    }
  }

  pub fn between(start: u32, end: u32) -> Self {
    Self { start, end }
  }
}

impl fmt::Display for ZoneSpan {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.start == self.end {
      write!(f, "Z{}", self.start)
    } else {
      write!(f, "Z{}-Z{}", self.start, self.end)
    }
  }
}

/// Zone label plus the absolute values behind it (empty for zone-number targets)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
  pub zone: ZoneSpan,
  pub detail: String,
}

/// ---------------------------------------------------------------------------
/// Boundary Lookup
/// ---------------------------------------------------------------------------

/// 1-based index of the first boundary `>= value`, `None` past the last one
pub fn lookup_zone(value: f64, boundaries: impl IntoIterator<Item = f64>) -> Option<u32> {
  boundaries
    .into_iter()
    .position(|upper| value <= upper)
    .map(|index| index as u32 + 1)
}

// Values above the top boundary land in Z1, not the top zone. Kept as is
// until the intended behaviour is confirmed; see test_value_above_all_boundaries_falls_back_to_z1.
fn zone_or_first(value: f64, boundaries: &[f64], table: &'static str) -> u32 {
  lookup_zone(value, boundaries.iter().copied()).unwrap_or_else(|| {
    warn!(
      value,
      table,
      len = boundaries.len(),
      "value is above every zone boundary, falling back to Z1"
    );
    1
  })
}

pub fn heart_rate_zone(bpm: f64, settings: &AthleteSportSettings) -> u32 {
  zone_or_first(
    bpm,
    &settings
      .heart_rate_zone_boundaries
      .iter()
      .map(|&upper| upper as f64)
      .collect::<Vec<_>>(),
    "heart_rate",
  )
}

/// Pace zones are matched on the percentage of threshold pace, not on min/km
pub fn pace_zone(percent: f64, settings: &AthleteSportSettings) -> u32 {
  zone_or_first(
    percent,
    &settings.pace_zone_boundaries,
    "pace",
  )
}

/// ---------------------------------------------------------------------------
/// Target Classification
/// ---------------------------------------------------------------------------

/// `None` when the units are not understood
pub fn classify_heart_rate(
  target: &Target<HeartRateUnits>,
  settings: &AthleteSportSettings,
) -> Option<Classification> {
  let source_hr = match target.units {
    HeartRateUnits::Zone => return Some(absolute_zone(target.value())),
    HeartRateUnits::PercentMax => settings.maximum_heart_rate,
    HeartRateUnits::PercentThreshold => settings.threshold_heart_rate,
    HeartRateUnits::Unknown => {
      warn!(?target, "unsupported heart rate units");
      return None;
    }
  };

  Some(classify_heart_rate_percent(target.value(), source_hr, settings))
}

/// Classify a percentage of `source_hr` (max or threshold heart rate)
pub fn classify_heart_rate_percent(
  value: TargetValue,
  source_hr: i64,
  settings: &AthleteSportSettings,
) -> Classification {
  match value {
    TargetValue::Single(percent) => {
      let bpm = percent_of(percent, source_hr as f64);
      Classification {
        zone: ZoneSpan::single(heart_rate_zone(bpm, settings)),
        detail: format!("{}", bpm.trunc() as i64),
      }
    }
    TargetValue::Range { start, end } => {
      let start_bpm = percent_of(start, source_hr as f64);
      let end_bpm = percent_of(end, source_hr as f64);
      Classification {
        zone: ZoneSpan::between(
          heart_rate_zone(start_bpm, settings),
          heart_rate_zone(end_bpm, settings),
        ),
        detail: format!(
          "{}-{} bpm",
          start_bpm.trunc() as i64,
          end_bpm.trunc() as i64
        ),
      }
    }
  }
}

/// `None` when the units are not understood
pub fn classify_pace(
  target: &Target<PaceUnits>,
  settings: &AthleteSportSettings,
) -> Option<Classification> {
  match target.units {
    PaceUnits::Zone => Some(absolute_zone(target.value())),
    PaceUnits::PercentThreshold => Some(classify_pace_percent(target.value(), settings)),
    PaceUnits::Unknown => {
      warn!(?target, "unsupported pace units");
      None
    }
  }
}

pub fn classify_pace_percent(value: TargetValue, settings: &AthleteSportSettings) -> Classification {
  match value {
    TargetValue::Single(percent) => Classification {
      zone: ZoneSpan::single(pace_zone(percent, settings)),
      detail: format!("{} min/km", pace_text(percent, settings.threshold_pace)),
    },
    TargetValue::Range { start, end } => Classification {
      zone: ZoneSpan::between(pace_zone(start, settings), pace_zone(end, settings)),
      detail: format!(
        "{}-{} min/km",
        pace_text(start, settings.threshold_pace),
        pace_text(end, settings.threshold_pace)
      ),
    },
  }
}

fn absolute_zone(value: TargetValue) -> Classification {
  let zone = match value {
    TargetValue::Single(zone) => ZoneSpan::single(zone as u32),
    TargetValue::Range { start, end } => ZoneSpan::between(start as u32, end as u32),
  };
  Classification {
    zone,
    detail: String::new(),
  }
}

fn percent_of(percent: f64, reference: f64) -> f64 {
  percent * reference / 100.0
}

/// `MM:SS` per kilometre for `percent` of `threshold_pace` (m/s)
fn pace_text(percent: f64, threshold_pace: f64) -> String {
  let speed = percent_of(percent, threshold_pace);
  if !speed.is_finite() || speed <= 0.0 {
    warn!(percent, threshold_pace, "cannot derive a pace from a non-positive speed");
    return "--:--".to_string();
  }
  let seconds_per_km = 1000.0 / speed;
  clock(seconds_per_km.trunc() as u64)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
