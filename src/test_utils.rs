//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Athlete settings fixtures
//! - Workout step factories
//! - Fake Strava and training log collaborators

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};

use crate::models::{
  AthleteSportSettings, HeartRateUnits, Intensity, LinkedActivity, PaceUnits, SportType,
  StravaActivity, Target, Workout, WorkoutDocument, WorkoutStep,
};
use crate::sync::{ActivityFeed, SyncError, TrainingLog};

/// ---------------------------------------------------------------------------
/// Settings Fixtures
/// ---------------------------------------------------------------------------

/// Run settings used across the tests:
/// - HR zones (bpm): 120 / 140 / 160 / 170 / 190
/// - Pace zones (% of 3.0 m/s threshold): 77.5 / 87.7 / 94.3 / 100 / 103.4 / 111.5 / 999
pub fn test_run_settings() -> AthleteSportSettings {
  AthleteSportSettings {
    maximum_heart_rate: 190,
    threshold_heart_rate: 180,
    heart_rate_zone_boundaries: vec![120, 140, 160, 170, 190],
    heart_rate_zone_names: vec![],
    threshold_pace: 3.0,
    pace_zone_boundaries: vec![77.5, 87.7, 94.3, 100.0, 103.4, 111.5, 999.0],
    pace_zone_names: vec![],
  }
}

/// ---------------------------------------------------------------------------
/// Step Factories
/// ---------------------------------------------------------------------------

pub fn hr_leaf(distance: f64, duration: f64, units: HeartRateUnits, value: f64) -> WorkoutStep {
  WorkoutStep::leaf(distance, duration, Intensity::HeartRate(Target::single(units, value)))
}

pub fn hr_range_leaf(
  distance: f64,
  duration: f64,
  units: HeartRateUnits,
  start: f64,
  end: f64,
) -> WorkoutStep {
  WorkoutStep::leaf(distance, duration, Intensity::HeartRate(Target::range(units, start, end)))
}

pub fn pace_leaf(distance: f64, duration: f64, units: PaceUnits, value: f64) -> WorkoutStep {
  WorkoutStep::leaf(distance, duration, Intensity::Pace(Target::single(units, value)))
}

pub fn pace_range_leaf(
  distance: f64,
  duration: f64,
  units: PaceUnits,
  start: f64,
  end: f64,
) -> WorkoutStep {
  WorkoutStep::leaf(distance, duration, Intensity::Pace(Target::range(units, start, end)))
}

/// Warm up, 5 x (400m fast, 2min easy), cool down
pub const SAMPLE_WORKOUT_JSON: &str = r#"{
  "id": 4242,
  "name": "5x400",
  "workout_doc": {
    "distance": 5600,
    "duration": 2700,
    "steps": [
      {"duration": 900, "hr": {"units": "%lthr", "start": 70, "end": 80}, "text": "Warm up"},
      {
        "reps": 5,
        "text": null,
        "steps": [
          {"distance": 400, "duration": 83.2, "pace": {"units": "%pace", "value": 103}},
          {"duration": 120, "hr": {"units": "hr_zone", "value": 1}}
        ]
      },
      {"duration": 600, "hr": {"units": "%hr", "value": 70}, "text": "Cool down"}
    ]
  }
}"#;

/// ---------------------------------------------------------------------------
/// Collaborator Factories
/// ---------------------------------------------------------------------------

fn test_start() -> DateTime<Utc> {
  Utc.with_ymd_and_hms(2024, 5, 2, 5, 31, 10).unwrap()
}

pub fn strava_activity(description: &str) -> StravaActivity {
  StravaActivity {
    description: description.to_string(),
    name: "Morning Run".to_string(),
    sport_type: "Run".to_string(),
    start_date: test_start(),
    start_date_local: Utc.with_ymd_and_hms(2024, 5, 2, 7, 31, 10).unwrap(),
  }
}

/// 10012.4m in 3120s, paired with `paired_event_id` if given
pub fn linked_activity(strava_id: &str, paired_event_id: Option<i64>) -> LinkedActivity {
  LinkedActivity {
    strava_id: strava_id.to_string(),
    paired_event_id,
    start_date: test_start(),
    distance: 10012.4,
    moving_time: 3120.0,
  }
}

/// Single-step workout: whole distance at 75-85% LTHR
pub fn planned_workout(id: i64, distance: f64, duration: f64) -> Workout {
  Workout {
    id,
    name: format!("Workout {}", id),
    workout_doc: Some(WorkoutDocument {
      steps: vec![hr_range_leaf(
        distance,
        duration,
        HeartRateUnits::PercentThreshold,
        75.0,
        85.0,
      )],
      distance,
      duration,
    }),
  }
}

/// ---------------------------------------------------------------------------
/// Fake Collaborators
/// ---------------------------------------------------------------------------

pub struct FakeActivityFeed {
  activity: Result<StravaActivity, SyncError>,
  updates: Mutex<Vec<(i64, String)>>,
}

impl FakeActivityFeed {
  pub fn new(activity: StravaActivity) -> Self {
    Self {
      activity: Ok(activity),
      updates: Mutex::new(Vec::new()),
    }
  }

  pub fn failing(error: SyncError) -> Self {
    Self {
      activity: Err(error),
      updates: Mutex::new(Vec::new()),
    }
  }

  pub fn updates(&self) -> Vec<(i64, String)> {
    self.updates.lock().unwrap().clone()
  }
}

impl ActivityFeed for FakeActivityFeed {
  async fn activity(&self, _id: i64) -> Result<StravaActivity, SyncError> {
    self.activity.clone()
  }

  async fn update_description(&self, id: i64, description: &str) -> Result<(), SyncError> {
    self.updates.lock().unwrap().push((id, description.to_string()));
    Ok(())
  }
}

pub struct FakeTrainingLog {
  activities: Vec<LinkedActivity>,
  workouts: Vec<Workout>,
  settings: AthleteSportSettings,
}

impl FakeTrainingLog {
  pub fn new(
    activities: Vec<LinkedActivity>,
    workouts: Vec<Workout>,
    settings: AthleteSportSettings,
  ) -> Self {
    Self {
      activities,
      workouts,
      settings,
    }
  }
}

impl TrainingLog for FakeTrainingLog {
  async fn activities(
    &self,
    _from: DateTime<Utc>,
    _to: DateTime<Utc>,
  ) -> Result<Vec<LinkedActivity>, SyncError> {
    Ok(self.activities.clone())
  }

  async fn workouts(&self, _from: DateTime<Utc>, _to: DateTime<Utc>) -> Result<Vec<Workout>, SyncError> {
    Ok(self.workouts.clone())
  }

  async fn sport_settings(&self, _sport: SportType) -> Result<AthleteSportSettings, SyncError> {
    Ok(self.settings.clone())
  }
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_settings_fixture_tables_ascend() {
    let settings = test_run_settings();
    assert!(settings
      .heart_rate_zone_boundaries
      .windows(2)
      .all(|pair| pair[0] < pair[1]));
    assert!(settings
      .pace_zone_boundaries
      .windows(2)
      .all(|pair| pair[0] < pair[1]));
  }

  #[tokio::test]
  async fn test_fake_feed_records_updates() {
    let feed = FakeActivityFeed::new(strava_activity(""));
    feed.update_description(1, "hello").await.unwrap();
    assert_eq!(feed.updates(), vec![(1, "hello".to_string())]);
  }
}
