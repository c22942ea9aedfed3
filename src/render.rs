//! Plain-text rendering of a workout tree
//!
//! Every step yields a line (or a block for repeat groups), possibly empty,
//! so the output keeps one entry per step even when the input is malformed.

use tracing::warn;

use crate::format::format_when;
use crate::models::{AthleteSportSettings, Intensity, StepKind, Workout, WorkoutDocument, WorkoutStep};
use crate::zones::{classify_heart_rate, classify_pace};

/// Summary of a planned workout; empty when it has no structured document
pub fn render_workout(workout: &Workout, settings: &AthleteSportSettings) -> String {
  match &workout.workout_doc {
    Some(document) => render(document, settings),
    None => {
      warn!(workout_id = workout.id, "workout has no structured document");
      String::new()
    }
  }
}

pub fn render(document: &WorkoutDocument, settings: &AthleteSportSettings) -> String {
  render_steps(&document.steps, settings)
}

pub fn render_steps(steps: &[WorkoutStep], settings: &AthleteSportSettings) -> String {
  steps
    .iter()
    .map(|step| render_step(step, settings))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Render one step. A repeat group becomes a `<n>X:` header followed by one
/// `- ` line per child, recursing into nested groups.
pub fn render_step(step: &WorkoutStep, settings: &AthleteSportSettings) -> String {
  match &step.kind {
    StepKind::Repeat { repetitions, steps } => {
      let mut lines = Vec::with_capacity(steps.len() + 1);
      lines.push(format!("{}X:", repetitions));
      lines.extend(
        steps
          .iter()
          .map(|child| format!("- {}", render_step(child, settings))),
      );
      lines.join("\n")
    }
    StepKind::Leaf(Intensity::HeartRate(target)) => classify_heart_rate(target, settings)
      .map(|zone| format!("{} @ {} ({})", when(step), zone.zone, zone.detail))
      .unwrap_or_default(),
    StepKind::Leaf(Intensity::Pace(target)) => classify_pace(target, settings)
      .map(|zone| format!("{} @ Pace {} ({})", when(step), zone.zone, zone.detail))
      .unwrap_or_default(),
    StepKind::Unrecognized => {
      warn!(
        distance = step.distance_meters,
        duration = step.duration_seconds,
        "unexpected workout step shape"
      );
      String::new()
    }
  }
}

fn when(step: &WorkoutStep) -> String {
  format_when(step.distance_meters, step.duration_seconds)
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
