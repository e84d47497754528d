//! Time arithmetic: whole-hour/day differences and calendar-day checks.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Whole hours from `now` until `ts`, truncated toward zero. Negative once `ts` has passed.
pub fn hours_between(now: DateTime<Utc>, ts: DateTime<Utc>) -> i64 {
  ts.signed_duration_since(now).num_hours()
}

/// Whole days from `now` until `ts`, truncated toward zero.
pub fn days_between(now: DateTime<Utc>, ts: DateTime<Utc>) -> i64 {
  ts.signed_duration_since(now).num_days()
}

/// Calendar date of `ts` as seen at `offset`.
pub fn local_day(ts: DateTime<Utc>, offset: FixedOffset) -> NaiveDate {
  ts.with_timezone(&offset).date_naive()
}

pub fn is_same_day(a: DateTime<Utc>, b: DateTime<Utc>, offset: FixedOffset) -> bool {
  local_day(a, offset) == local_day(b, offset)
}

/// True when `ts` falls on the calendar day after `now`.
pub fn is_next_day(now: DateTime<Utc>, ts: DateTime<Utc>, offset: FixedOffset) -> bool {
  local_day(now, offset).succ_opt() == Some(local_day(ts, offset))
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::{Duration, Offset, TimeZone};

  fn t(h: u32, m: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 10, h, m, 0).unwrap()
  }

  #[test]
  fn hours_truncate_toward_zero() {
    assert_eq!(hours_between(t(10, 0), t(12, 59)), 2);
    assert_eq!(hours_between(t(10, 0), t(10, 30)), 0);
    assert_eq!(hours_between(t(12, 0), t(10, 30)), -1);
  }

  #[test]
  fn days_count_full_days_only() {
    let now = t(20, 0);
    assert_eq!(days_between(now, now + Duration::hours(47)), 1);
    assert_eq!(days_between(now, now + Duration::hours(48)), 2);
  }

  #[test]
  fn calendar_day_respects_offset() {
    let utc = Utc.fix();
    let kst = FixedOffset::east_opt(9 * 3600).unwrap();
    // 14:00 UTC is 23:00 in UTC+9; 16:00 UTC is already the next day there.
    assert!(is_same_day(t(20, 0), t(23, 0), utc));
    assert!(!is_same_day(t(14, 0), t(16, 0), kst));
    assert!(is_next_day(t(14, 0), t(16, 0), kst));
  }
}
