use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use workout_summary::config::DEFAULT_SUMMARY_SEPARATOR;
use workout_summary::sync::append_summary;
use workout_summary::{render, render_workout, AthleteSportSettings, Workout, WorkoutDocument};

/// Render a planned workout as a plain-text training summary
#[derive(Parser, Debug)]
#[command(name = "workout-summary")]
#[command(version, about, long_about = None)]
struct Cli {
  /// Workout JSON: a calendar event with `workout_doc`, or the document itself
  #[arg(long)]
  workout: PathBuf,

  /// Sport settings JSON holding the athlete's thresholds and zones
  #[arg(long)]
  settings: PathBuf,

  /// Existing activity description to append the summary to
  #[arg(long)]
  description: Option<String>,

  /// Line placed between the description and the summary
  #[arg(long, default_value = DEFAULT_SUMMARY_SEPARATOR)]
  separator: String,
}

fn init_logging() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();
}

fn main() -> Result<()> {
  init_logging();
  let cli = Cli::parse();

  let settings: AthleteSportSettings = serde_json::from_str(&read(&cli.settings)?)
    .with_context(|| format!("invalid sport settings in {}", cli.settings.display()))?;

  let workout_json: serde_json::Value = serde_json::from_str(&read(&cli.workout)?)
    .with_context(|| format!("invalid JSON in {}", cli.workout.display()))?;

  let summary = if workout_json.get("workout_doc").is_some() {
    let workout: Workout = serde_json::from_value(workout_json)
      .with_context(|| format!("invalid workout in {}", cli.workout.display()))?;
    tracing::debug!(workout_id = workout.id, name = %workout.name, "rendering workout");
    render_workout(&workout, &settings)
  } else {
    let document: WorkoutDocument = serde_json::from_value(workout_json)
      .with_context(|| format!("invalid workout document in {}", cli.workout.display()))?;
    render(&document, &settings)
  };

  match cli.description {
    Some(existing) => println!("{}", append_summary(&existing, &cli.separator, &summary)),
    None => println!("{}", summary),
  }

  Ok(())
}

fn read(path: &Path) -> Result<String> {
  fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
