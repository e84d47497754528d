//! Display labels and relative deadline text.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::config::Config;
use crate::types::{Difficulty, RiskLevel};

pub const OVERDUE: &str = "Overdue!";
pub const TOMORROW: &str = "Tomorrow";

pub fn difficulty_label(difficulty: Difficulty) -> &'static str {
  match difficulty {
    Difficulty::Easy => "Easy",
    Difficulty::Medium => "Medium",
    Difficulty::Hard => "Hard",
  }
}

pub fn risk_label(risk: RiskLevel) -> &'static str {
  match risk {
    RiskLevel::Safe => "Safe",
    RiskLevel::Warning => "Caution",
    RiskLevel::Danger => "Danger",
  }
}

/// Relative deadline text with calendar days in UTC.
pub fn relative_deadline_text(deadline: DateTime<Utc>, now: DateTime<Utc>) -> String {
  relative_deadline_text_with(deadline, now, &Config::default())
}

/// - same calendar day: "Nh left today", or `OVERDUE` once whole hours left is <= 0
/// - next calendar day: `TOMORROW`, whatever the hour
/// - later: "In N days" from the truncated day difference
/// - an earlier day: `OVERDUE`
pub fn relative_deadline_text_with(
  deadline: DateTime<Utc>,
  now: DateTime<Utc>,
  config: &Config,
) -> String {
  let offset = config.offset();
  if clock::is_same_day(now, deadline, offset) {
    let hours = clock::hours_between(now, deadline);
    return if hours <= 0 {
      OVERDUE.to_string()
    } else {
      format!("{}h left today", hours)
    };
  }
  if clock::is_next_day(now, deadline, offset) {
    return TOMORROW.to_string();
  }
  if deadline < now {
    return OVERDUE.to_string();
  }
  match clock::days_between(now, deadline) {
    1 => "In 1 day".to_string(),
    days => format!("In {} days", days),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};

  fn at(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
  }

  #[test]
  fn labels_are_one_to_one() {
    assert_eq!(difficulty_label(Difficulty::Easy), "Easy");
    assert_eq!(difficulty_label(Difficulty::Hard), "Hard");
    assert_eq!(risk_label(RiskLevel::Warning), "Caution");
    assert_eq!(risk_label(RiskLevel::Danger), "Danger");
  }

  #[test]
  fn same_day_truncates_hours() {
    assert_eq!(relative_deadline_text(at(12, 59), at(10, 0)), "2h left today");
  }

  #[test]
  fn under_an_hour_today_reads_as_overdue() {
    // 30 minutes truncates to 0 whole hours.
    assert_eq!(relative_deadline_text(at(10, 30), at(10, 0)), OVERDUE);
    assert_eq!(relative_deadline_text(at(8, 0), at(10, 0)), OVERDUE);
  }

  #[test]
  fn next_calendar_day_is_tomorrow_regardless_of_hour() {
    let now = at(23, 0);
    assert_eq!(relative_deadline_text(now + Duration::minutes(90), now), TOMORROW);
    let now = at(0, 30);
    assert_eq!(relative_deadline_text(now + Duration::hours(47), now), TOMORROW);
  }

  #[test]
  fn later_days_use_truncated_difference() {
    let now = at(9, 0);
    assert_eq!(relative_deadline_text(now + Duration::hours(71), now), "In 2 days");
    assert_eq!(relative_deadline_text(now + Duration::hours(24 * 7), now), "In 7 days");
  }

  #[test]
  fn two_calendar_days_but_under_48_hours_is_one_day() {
    let now = at(22, 0);
    assert_eq!(relative_deadline_text(now + Duration::hours(27), now), "In 1 day");
  }

  #[test]
  fn earlier_day_is_overdue() {
    let now = at(9, 0);
    assert_eq!(relative_deadline_text(now - Duration::hours(30), now), OVERDUE);
  }

  #[test]
  fn offset_moves_the_day_boundary() {
    let config = Config {
      utc_offset_minutes: 9 * 60,
      ..Config::default()
    };
    // 14:00 UTC = 23:00 at +9; 16:00 UTC is already tomorrow there.
    assert_eq!(relative_deadline_text(at(16, 0), at(14, 0)), "2h left today");
    assert_eq!(relative_deadline_text_with(at(16, 0), at(14, 0), &config), TOMORROW);
  }
}
