use serde::Deserialize;
use tracing::debug;

use super::null_as_default;

/// ---------------------------------------------------------------------------
/// Intensity Targets
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HeartRateUnits {
  /// The target value is the zone number itself
  #[serde(rename = "hr_zone")]
  Zone,
  /// Percentage of maximum heart rate
  #[serde(rename = "%hr")]
  PercentMax,
  /// Percentage of lactate threshold heart rate
  #[serde(rename = "%lthr")]
  PercentThreshold,
  #[default]
  #[serde(other)]
  Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum PaceUnits {
  #[serde(rename = "pace_zone")]
  Zone,
  /// Percentage of threshold pace
  #[serde(rename = "%pace")]
  PercentThreshold,
  #[default]
  #[serde(other)]
  Unknown,
}

/// A target as sent by the training log: either `value` or, when `value` is
/// zero, the `start`..`end` range.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(bound(deserialize = "U: Deserialize<'de> + Default"))]
pub struct Target<U> {
  #[serde(default, deserialize_with = "null_as_default")]
  pub units: U,
  #[serde(default, deserialize_with = "null_as_default")]
  pub value: f64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub start: f64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub end: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetValue {
  Single(f64),
  Range { start: f64, end: f64 },
}

impl<U> Target<U> {
  pub fn single(units: U, value: f64) -> Self {
    Self {
      units,
      value,
      start: 0.0,
      end: 0.0,
    }
  }

  pub fn range(units: U, start: f64, end: f64) -> Self {
    Self {
      units,
      value: 0.0,
      start,
      end,
    }
  }

  pub fn value(&self) -> TargetValue {
    if self.value > 0.0 {
      TargetValue::Single(self.value)
    } else {
      TargetValue::Range {
        start: self.start,
        end: self.end,
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Intensity {
  HeartRate(Target<HeartRateUnits>),
  Pace(Target<PaceUnits>),
}

/// ---------------------------------------------------------------------------
/// Workout Tree
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum StepKind {
  Leaf(Intensity),
  Repeat {
    repetitions: u32,
    steps: Vec<WorkoutStep>,
  },
  /// Neither a target nor a usable repeat group
  Unrecognized,
}

/// One node of the workout tree. Either distance or duration may be zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "WireStep")]
pub struct WorkoutStep {
  pub distance_meters: f64,
  pub duration_seconds: f64,
  pub text: Option<String>,
  pub kind: StepKind,
}

impl WorkoutStep {
  pub fn leaf(distance_meters: f64, duration_seconds: f64, intensity: Intensity) -> Self {
    Self {
      distance_meters,
      duration_seconds,
      text: None,
      kind: StepKind::Leaf(intensity),
    }
  }

  pub fn repeat(repetitions: u32, steps: Vec<WorkoutStep>) -> Self {
    Self {
      distance_meters: 0.0,
      duration_seconds: 0.0,
      text: None,
      kind: StepKind::Repeat { repetitions, steps },
    }
  }

  pub fn with_text(mut self, text: impl Into<String>) -> Self {
    self.text = Some(text.into());
    self
  }
}

/// Step exactly as the training log encodes it, both shapes in one object
#[derive(Deserialize)]
struct WireStep {
  #[serde(default, deserialize_with = "null_as_default")]
  distance: f64,
  #[serde(default, deserialize_with = "null_as_default")]
  duration: f64,
  #[serde(default)]
  text: Option<String>,
  #[serde(default)]
  hr: Option<Target<HeartRateUnits>>,
  #[serde(default)]
  pace: Option<Target<PaceUnits>>,
  #[serde(default, deserialize_with = "null_as_default")]
  steps: Vec<WorkoutStep>,
  #[serde(default, deserialize_with = "null_as_default")]
  reps: i64,
}

impl From<WireStep> for WorkoutStep {
  fn from(wire: WireStep) -> Self {
    let kind = if wire.reps > 0 && !wire.steps.is_empty() {
      if wire.hr.is_some() || wire.pace.is_some() {
        debug!(reps = wire.reps, "repeat group also carries a target, ignoring the target");
      }
      StepKind::Repeat {
        repetitions: u32::try_from(wire.reps).unwrap_or(u32::MAX),
        steps: wire.steps,
      }
    } else if let Some(hr) = wire.hr {
      StepKind::Leaf(Intensity::HeartRate(hr))
    } else if let Some(pace) = wire.pace {
      StepKind::Leaf(Intensity::Pace(pace))
    } else {
      StepKind::Unrecognized
    };

    Self {
      distance_meters: wire.distance,
      duration_seconds: wire.duration,
      text: wire.text,
      kind,
    }
  }
}

/// Top-level step sequence plus the planned totals
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct WorkoutDocument {
  #[serde(default, deserialize_with = "null_as_default")]
  pub steps: Vec<WorkoutStep>,
  #[serde(default, deserialize_with = "null_as_default")]
  pub distance: f64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub duration: f64,
}

/// Planned workout event from the training calendar
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Workout {
  pub id: i64,
  #[serde(default, deserialize_with = "null_as_default")]
  pub name: String,
  #[serde(default)]
  pub workout_doc: Option<WorkoutDocument>,
}
