//! Upcoming-deadline timeline and dashboard tab filtering.

use chrono::{DateTime, Utc};

use crate::clock;
use crate::types::{Assignment, RiskLevel, Tab, TabCounts, TimelineEntry};

/// The next `limit` open assignments by deadline.
///
/// Progress is how close each deadline is relative to the furthest one shown:
/// `(1 - hours_left / max_hours) * 100`, or 0 when the furthest is not in the future.
pub fn upcoming(assignments: &[Assignment], now: DateTime<Utc>, limit: usize) -> Vec<TimelineEntry> {
  let mut open: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_completed()).collect();
  open.sort_by_key(|a| a.deadline);
  open.truncate(limit);

  let max_hours = open
    .iter()
    .map(|a| clock::hours_between(now, a.deadline))
    .max()
    .unwrap_or(0);

  open
    .into_iter()
    .map(|a| {
      let hours_left = clock::hours_between(now, a.deadline);
      let progress_percent = if max_hours > 0 {
        ((1.0 - hours_left as f64 / max_hours as f64) * 100.0).clamp(0.0, 100.0)
      } else {
        0.0
      };
      let label = if hours_left <= 0 {
        "due!".to_string()
      } else {
        format!("{}h", hours_left)
      };
      TimelineEntry {
        id: a.id.clone(),
        title: a.title.clone(),
        risk_level: a.risk_level,
        hours_left,
        progress_percent,
        label,
      }
    })
    .collect()
}

pub fn matches_tab(tab: Tab, a: &Assignment) -> bool {
  match tab {
    Tab::All => !a.is_completed(),
    Tab::Danger => !a.is_completed() && a.risk_level == RiskLevel::Danger,
    Tab::Completed => a.is_completed(),
  }
}

pub fn filter_tab(tab: Tab, assignments: &[Assignment]) -> Vec<&Assignment> {
  assignments.iter().filter(|a| matches_tab(tab, a)).collect()
}

pub fn tab_counts(assignments: &[Assignment]) -> TabCounts {
  TabCounts {
    pending: filter_tab(Tab::All, assignments).len(),
    danger: filter_tab(Tab::Danger, assignments).len(),
    completed: filter_tab(Tab::Completed, assignments).len(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{AssignmentStatus, Difficulty};
  use chrono::{Duration, TimeZone};

  fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap()
  }

  fn a(id: &str, hours_left: i64, level: RiskLevel, status: AssignmentStatus) -> Assignment {
    Assignment {
      id: id.into(),
      title: format!("Assignment {}", id),
      subject: "History".into(),
      description: None,
      difficulty: Difficulty::Medium,
      estimated_hours: 3.0,
      deadline: now() + Duration::hours(hours_left),
      created_at: now() - Duration::days(2),
      completed_at: None,
      status,
      risk_level: level,
      ai_insight: None,
    }
  }

  #[test]
  fn sorted_limited_and_scaled() {
    let list = vec![
      a("late", 100, RiskLevel::Safe, AssignmentStatus::Pending),
      a("done", 1, RiskLevel::Danger, AssignmentStatus::Completed),
      a("soon", 25, RiskLevel::Warning, AssignmentStatus::Pending),
      a("past", -2, RiskLevel::Danger, AssignmentStatus::InProgress),
    ];
    let rows = upcoming(&list, now(), 5);
    let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["past", "soon", "late"]);
    assert_eq!(rows[0].label, "due!");
    assert_eq!(rows[0].progress_percent, 100.0);
    assert_eq!(rows[1].label, "25h");
    assert_eq!(rows[1].progress_percent, 75.0);
    assert_eq!(rows[2].progress_percent, 0.0);

    assert_eq!(upcoming(&list, now(), 1).len(), 1);
  }

  #[test]
  fn all_overdue_means_zero_progress() {
    let list = vec![a("x", -5, RiskLevel::Danger, AssignmentStatus::Pending)];
    assert_eq!(upcoming(&list, now(), 5)[0].progress_percent, 0.0);
  }

  #[test]
  fn tabs_split_open_danger_and_completed() {
    let list = vec![
      a("1", 5, RiskLevel::Danger, AssignmentStatus::Pending),
      a("2", 5, RiskLevel::Danger, AssignmentStatus::Completed),
      a("3", 50, RiskLevel::Safe, AssignmentStatus::InProgress),
    ];
    assert_eq!(
      tab_counts(&list),
      TabCounts {
        pending: 2,
        danger: 1,
        completed: 1
      }
    );
    assert_eq!(filter_tab(Tab::Danger, &list)[0].id, "1");
    assert_eq!(filter_tab(Tab::Completed, &list)[0].id, "2");
  }
}
