//! Activity description sync
//!
//! Pairs an uploaded Strava activity with the workout planned for it in the
//! training log, renders that workout, and appends the summary to the
//! activity description. Network access lives behind the `ActivityFeed` and
//! `TrainingLog` traits; this module only decides what to fetch and write.

use std::future::Future;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use tracing::{debug, info};

use crate::config::SyncConfig;
use crate::models::{AthleteSportSettings, LinkedActivity, SportType, StravaActivity, Workout};
use crate::render::render_workout;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, thiserror::Error)]
pub enum SyncError {
  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Not authenticated with {0}")]
  Unauthorized(String),

  #[error("Collaborator error: {0}")]
  Collaborator(String),

  #[error("Invalid search window of {0} minutes")]
  InvalidWindow(i64),
}

/// ---------------------------------------------------------------------------
/// Collaborators
/// ---------------------------------------------------------------------------

/// Where activities are uploaded and their descriptions live (Strava)
pub trait ActivityFeed {
  fn activity(&self, id: i64) -> impl Future<Output = Result<StravaActivity, SyncError>> + Send;

  fn update_description(
    &self,
    id: i64,
    description: &str,
  ) -> impl Future<Output = Result<(), SyncError>> + Send;
}

/// Training analytics service holding planned workouts and athlete settings
pub trait TrainingLog {
  fn activities(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<LinkedActivity>, SyncError>> + Send;

  fn workouts(
    &self,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
  ) -> impl Future<Output = Result<Vec<Workout>, SyncError>> + Send;

  fn sport_settings(
    &self,
    sport: SportType,
  ) -> impl Future<Output = Result<AthleteSportSettings, SyncError>> + Send;
}

/// ---------------------------------------------------------------------------
/// Description Helpers
/// ---------------------------------------------------------------------------

pub fn has_summary(description: &str, separator: &str) -> bool {
  description.contains(separator)
}

pub fn append_summary(existing: &str, separator: &str, summary: &str) -> String {
  if existing.is_empty() {
    format!("{}\n{}", separator, summary)
  } else {
    format!("{}\n{}\n{}", existing, separator, summary)
  }
}

/// ---------------------------------------------------------------------------
/// Matching
/// ---------------------------------------------------------------------------

pub fn find_linked_activity(activities: &[LinkedActivity], strava_id: i64) -> Option<&LinkedActivity> {
  let strava_id = strava_id.to_string();
  activities.iter().find(|activity| activity.strava_id == strava_id)
}

/// The workout the log paired with `activity`, or else the first one whose
/// planned distance or duration is within `tolerance` of what was done.
pub fn find_paired_workout<'a>(
  activity: &LinkedActivity,
  workouts: &'a [Workout],
  tolerance: f64,
) -> Option<&'a Workout> {
  if let Some(paired_id) = activity.paired_event_id {
    if let Some(workout) = workouts.iter().find(|workout| workout.id == paired_id) {
      return Some(workout);
    }
  }

  workouts.iter().find(|workout| {
    workout.workout_doc.as_ref().is_some_and(|doc| {
      within(doc.distance, activity.distance, tolerance)
        || within(doc.duration, activity.moving_time, tolerance)
    })
  })
}

fn within(planned: f64, actual: f64, tolerance: f64) -> bool {
  (planned - actual).abs() < planned * tolerance
}

/// UTC calendar day containing `start`, as `[00:00, next 00:00)`
pub fn day_window(start: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
  let from = start.date_naive().and_time(NaiveTime::MIN).and_utc();
  (from, from + Duration::days(1))
}

/// `start` +/- `minutes`; the window must be positive and representable
pub fn search_window(
  start: DateTime<Utc>,
  minutes: i64,
) -> Result<(DateTime<Utc>, DateTime<Utc>), SyncError> {
  let window = Duration::try_minutes(minutes)
    .filter(|window| *window > Duration::zero())
    .ok_or(SyncError::InvalidWindow(minutes))?;
  let from = start
    .checked_sub_signed(window)
    .ok_or(SyncError::InvalidWindow(minutes))?;
  let to = start
    .checked_add_signed(window)
    .ok_or(SyncError::InvalidWindow(minutes))?;
  Ok((from, to))
}

/// ---------------------------------------------------------------------------
/// Sync Service
/// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
  Updated { description: String },
  AlreadySummarized,
  /// The paired workout rendered to nothing, description left alone
  NothingToRender,
}

pub struct SyncService<F, L> {
  config: SyncConfig,
  feed: F,
  log: L,
}

impl<F, L> SyncService<F, L>
where
  F: ActivityFeed,
  L: TrainingLog,
{
  pub fn new(config: SyncConfig, feed: F, log: L) -> Self {
    Self { config, feed, log }
  }

  pub fn config(&self) -> &SyncConfig {
    &self.config
  }

  pub async fn sync_activity(&self, strava_id: i64) -> Result<SyncOutcome, SyncError> {
    let activity = self.feed.activity(strava_id).await?;
    let separator = &self.config.summary_separator;

    if has_summary(&activity.description, separator) {
      info!(strava_id, "activity already contains a workout summary");
      return Ok(SyncOutcome::AlreadySummarized);
    }

    let (from, to) = search_window(activity.start_date_local, self.config.activity_window_minutes)?;
    let candidates = self.log.activities(from, to).await?;
    let linked = find_linked_activity(&candidates, strava_id).ok_or_else(|| {
      SyncError::NotFound(format!("no training log activity for Strava activity {}", strava_id))
    })?;
    debug!(strava_id, paired_event_id = ?linked.paired_event_id, "found linked activity");

    let (from, to) = day_window(linked.start_date);
    let workouts = self.log.workouts(from, to).await?;
    let workout = find_paired_workout(linked, &workouts, self.config.match_tolerance)
      .ok_or_else(|| {
        SyncError::NotFound(format!("no planned workout for Strava activity {}", strava_id))
      })?;
    debug!(strava_id, workout_id = workout.id, "found planned workout");

    let settings = self.log.sport_settings(self.config.sport).await?;
    let summary = render_workout(workout, &settings);
    if summary.is_empty() {
      info!(strava_id, workout_id = workout.id, "workout rendered an empty summary");
      return Ok(SyncOutcome::NothingToRender);
    }

    let description = append_summary(&activity.description, separator, &summary);
    self.feed.update_description(strava_id, &description).await?;
    info!(strava_id, workout_id = workout.id, "activity description updated");

    Ok(SyncOutcome::Updated { description })
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
