//! Human-readable text for step distances and durations

/// Text for how long a step lasts.
///
/// When both values are set the training log has usually back-filled one of
/// them from the other. A distance that is a whole multiple of 100m is taken
/// to be the authored value and shown alone.
pub fn format_when(distance_meters: f64, duration_seconds: f64) -> String {
  let distance = (distance_meters > 0.0).then(|| distance_text(distance_meters));
  let duration = (duration_seconds > 0.0).then(|| duration_text(duration_seconds));

  match (duration, distance) {
    (None, None) => String::new(),
    (Some(duration), None) => duration,
    (None, Some(distance)) => distance,
    (Some(duration), Some(distance)) => {
      if authored_as_distance(distance_meters) {
        distance
      } else {
        format!("{} / {}", duration, distance)
      }
    }
  }
}

fn authored_as_distance(distance_meters: f64) -> bool {
  (distance_meters.trunc() as i64) % 100 == 0
}

pub fn distance_text(distance_meters: f64) -> String {
  if distance_meters < 1000.0 {
    format!("{}m", distance_meters.trunc() as i64)
  } else {
    format!("{}km", significant(distance_meters / 1000.0, 2))
  }
}

pub fn duration_text(duration_seconds: f64) -> String {
  let seconds = round_to_ten(duration_seconds);
  if seconds < 60 {
    format!("{}s", seconds)
  } else {
    format!("{}min", clock(seconds))
  }
}

/// Nearest multiple of ten seconds, halves rounding up
fn round_to_ten(seconds: f64) -> u64 {
  ((seconds / 10.0).round() * 10.0).max(0.0) as u64
}

/// `MM:SS`, minutes wrap at the hour
pub fn clock(total_seconds: u64) -> String {
  format!("{:02}:{:02}", (total_seconds / 60) % 60, total_seconds % 60)
}

/// Positive `value` rounded to `digits` significant digits, trailing zeros dropped
fn significant(value: f64, digits: i32) -> String {
  let magnitude = value.abs().log10().floor() as i32;

  if magnitude >= digits {
    let factor = 10f64.powi(magnitude - digits + 1);
    return format!("{}", ((value / factor).round() * factor) as i64);
  }

  let decimals = (digits - 1 - magnitude).max(0) as usize;
  let text = format!("{:.*}", decimals, value);
  if text.contains('.') {
    text.trim_end_matches('0').trim_end_matches('.').to_string()
  } else {
    text
  }
}

/// ---------------------------------------------------------------------------
/// Tests
/// ---------------------------------------------------------------------------
