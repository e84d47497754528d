//! Risk tier from hours left vs. difficulty-weighted effort.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::config::Config;
use crate::types::{Difficulty, RiskLevel};

/// Classify with the default multipliers and buffer.
pub fn classify_risk(
  deadline: DateTime<Utc>,
  estimated_hours: f64,
  difficulty: Difficulty,
  now: DateTime<Utc>,
) -> RiskLevel {
  classify_risk_with(deadline, estimated_hours, difficulty, now, &Config::default())
}

/// `required = estimated * multiplier`, `buffer = required * buffer_ratio`.
///
/// - hours left `< required` -> danger
/// - hours left `< required + buffer` -> warning
/// - otherwise safe
///
/// Both comparisons are strict: exactly `required + buffer` hours is safe.
/// `estimated_hours` is not validated here; see `normalize`.
pub fn classify_risk_with(
  deadline: DateTime<Utc>,
  estimated_hours: f64,
  difficulty: Difficulty,
  now: DateTime<Utc>,
  config: &Config,
) -> RiskLevel {
  let hours_left = clock::hours_between(now, deadline) as f64;
  let required = estimated_hours * config.multiplier(difficulty);
  let buffer = required * config.buffer_ratio;

  if hours_left < required {
    RiskLevel::Danger
  } else if hours_left < required + buffer {
    RiskLevel::Warning
  } else {
    RiskLevel::Safe
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, TimeZone};
  use proptest::prelude::*;

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
  }

  #[test]
  fn exactly_at_buffer_edge_is_safe() {
    // required 12, buffer 6: 18 is not < 18.
    let r = classify_risk(now() + Duration::hours(18), 8.0, Difficulty::Hard, now());
    assert_eq!(r, RiskLevel::Safe);
  }

  #[test]
  fn one_hour_short_of_buffer_edge_is_warning() {
    let r = classify_risk(now() + Duration::hours(17), 8.0, Difficulty::Hard, now());
    assert_eq!(r, RiskLevel::Warning);
  }

  #[test]
  fn exactly_at_required_is_warning() {
    let r = classify_risk(now() + Duration::hours(12), 8.0, Difficulty::Hard, now());
    assert_eq!(r, RiskLevel::Warning);
  }

  #[test]
  fn medium_three_days_out_is_safe() {
    let r = classify_risk(now() + Duration::hours(72), 4.0, Difficulty::Medium, now());
    assert_eq!(r, RiskLevel::Safe);
  }

  #[test]
  fn medium_one_hour_left_is_danger() {
    let r = classify_risk(now() + Duration::hours(1), 5.0, Difficulty::Medium, now());
    assert_eq!(r, RiskLevel::Danger);
  }

  #[test]
  fn past_deadline_is_danger() {
    let r = classify_risk(now() - Duration::hours(3), 0.5, Difficulty::Easy, now());
    assert_eq!(r, RiskLevel::Danger);
  }

  #[test]
  fn partial_hours_are_truncated() {
    // 5h59m counts as 5 whole hours; easy 6h needs 6.
    let r = classify_risk(now() + Duration::minutes(359), 6.0, Difficulty::Easy, now());
    assert_eq!(r, RiskLevel::Danger);
  }

  #[test]
  fn custom_buffer_ratio_widens_warning_band() {
    let config = Config {
      buffer_ratio: 1.0,
      ..Config::default()
    };
    let deadline = now() + Duration::hours(15);
    assert_eq!(
      classify_risk(deadline, 10.0, Difficulty::Easy, now()),
      RiskLevel::Safe
    );
    assert_eq!(
      classify_risk_with(deadline, 10.0, Difficulty::Easy, now(), &config),
      RiskLevel::Warning
    );
  }

  fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
      Just(Difficulty::Easy),
      Just(Difficulty::Medium),
      Just(Difficulty::Hard),
    ]
  }

  proptest! {
    #[test]
    fn earlier_deadline_never_lowers_severity(
      estimated in 0.1f64..200.0,
      d in difficulty(),
      later in -500i64..2000,
      shift in 0i64..2000,
    ) {
      let late = now() + Duration::minutes(later * 30);
      let early = late - Duration::minutes(shift * 30);
      let late_tier = classify_risk(late, estimated, d, now());
      let early_tier = classify_risk(early, estimated, d, now());
      prop_assert!(early_tier >= late_tier);
    }

    #[test]
    fn same_inputs_same_tier(
      estimated in 0.1f64..200.0,
      d in difficulty(),
      offset in -500i64..2000,
    ) {
      let deadline = now() + Duration::hours(offset);
      let first = classify_risk(deadline, estimated, d, now());
      let _ = classify_risk(deadline + Duration::hours(1), estimated * 2.0, d, now());
      prop_assert_eq!(first, classify_risk(deadline, estimated, d, now()));
    }
  }
}
