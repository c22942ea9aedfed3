pub mod activity;
pub mod settings;
pub mod workout;

pub use activity::{LinkedActivity, StravaActivity};
pub use settings::{AthleteSportSettings, SportType};
pub use workout::{
  HeartRateUnits, Intensity, PaceUnits, StepKind, Target, TargetValue, Workout, WorkoutDocument,
  WorkoutStep,
};

use serde::{Deserialize, Deserializer};

/// The training log sends `null` for absent numbers and lists; treat it like a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
