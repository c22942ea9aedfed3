//! Plain-text summaries of structured workouts
//!
//! A planned workout from the training log is a tree of steps. Leaves carry a
//! heart-rate or pace target; repeat groups wrap child steps. `render` walks
//! the tree and classifies each target against the athlete's zone tables.

pub mod config;
pub mod format;
pub mod models;
pub mod render;
pub mod sync;
pub mod zones;

#[cfg(test)]
mod test_utils;

pub use config::{ConfigError, SyncConfig};
pub use format::format_when;
pub use models::{AthleteSportSettings, Workout, WorkoutDocument, WorkoutStep};
pub use render::{render, render_step, render_workout};
pub use sync::{SyncError, SyncOutcome, SyncService};
