//! Productivity aggregates over a snapshot of the assignment list.

use std::collections::BTreeSet;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

use crate::clock;
use crate::config::Config;
use crate::types::{Assignment, ProductivityStats};

pub fn aggregate_stats(assignments: &[Assignment], now: DateTime<Utc>) -> ProductivityStats {
  aggregate_stats_with(assignments, now, &Config::default())
}

/// - `completed_today`: `completed_at` on the same calendar day as `now`
/// - `total_pending`: anything not completed
/// - `today_score`: `min(100, base_score + completed_today * completion_points)`
/// - `average_completion`: rounded completed share in percent, 0 for an empty list
/// - `streak_days`: `streak_placeholder` if set, otherwise from completion history
pub fn aggregate_stats_with(
  assignments: &[Assignment],
  now: DateTime<Utc>,
  config: &Config,
) -> ProductivityStats {
  let offset = config.offset();

  let completed_today = assignments
    .iter()
    .filter(|a| {
      a.completed_at
        .is_some_and(|ts| clock::is_same_day(ts, now, offset))
    })
    .count();
  let total_completed = assignments.iter().filter(|a| a.is_completed()).count();
  let total_pending = assignments.len() - total_completed;

  let score = u64::from(config.base_score)
    + u64::from(config.completion_points) * completed_today as u64;
  let today_score = score.min(100) as u32;

  let average_completion = if assignments.is_empty() {
    0
  } else {
    (total_completed as f64 / assignments.len() as f64 * 100.0).round() as u32
  };

  let streak_days = match config.streak_placeholder {
    Some(fixed) => fixed,
    None => streak_days(assignments, now, offset),
  };

  ProductivityStats {
    today_score,
    completed_today,
    total_pending,
    average_completion,
    streak_days,
  }
}

/// Consecutive calendar days with at least one completion, ending today. A day with
/// nothing completed yet does not break the streak until it is over, so counting
/// starts from yesterday in that case.
pub fn streak_days(assignments: &[Assignment], now: DateTime<Utc>, offset: FixedOffset) -> u32 {
  let days: BTreeSet<NaiveDate> = assignments
    .iter()
    .filter_map(|a| a.completed_at)
    .map(|ts| clock::local_day(ts, offset))
    .collect();

  let today = clock::local_day(now, offset);
  let mut cursor = if days.contains(&today) {
    Some(today)
  } else {
    today.pred_opt()
  };

  let mut streak = 0;
  while let Some(day) = cursor.filter(|d| days.contains(d)) {
    streak += 1;
    cursor = day.pred_opt();
  }
  streak
}
