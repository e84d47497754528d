//! Built-in demo list shown on first load.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::Config;
use crate::insight;
use crate::risk;
use crate::types::{Assignment, AssignmentStatus, Difficulty, RiskLevel};

/// Three open assignments due in 18h, 72h and 168h. Risk and insight are
/// computed against `now`, not hard-coded.
pub fn demo_assignments<R: Rng + ?Sized>(
  now: DateTime<Utc>,
  rng: &mut R,
  config: &Config,
) -> Vec<Assignment> {
  let seeds = [
    (
      "1",
      "Economics final report",
      "Principles of Economics",
      "Analysis of the supply and demand equilibrium",
      Difficulty::Hard,
      8.0,
      18,
      48,
      AssignmentStatus::InProgress,
    ),
    (
      "2",
      "Programming assignment #5",
      "Intro to Computer Science",
      "Implement an algorithm using recursion",
      Difficulty::Medium,
      4.0,
      72,
      24,
      AssignmentStatus::Pending,
    ),
    (
      "3",
      "English literature essay",
      "Survey of English Literature",
      "Essay on Shakespeare's Hamlet",
      Difficulty::Medium,
      5.0,
      168,
      12,
      AssignmentStatus::Pending,
    ),
  ];

  seeds
    .into_iter()
    .map(
      |(id, title, subject, description, difficulty, hours, due_in, created_ago, status)| {
        let deadline = now + Duration::hours(due_in);
        let mut a = Assignment {
          id: id.to_string(),
          title: title.to_string(),
          subject: subject.to_string(),
          description: Some(description.to_string()),
          difficulty,
          estimated_hours: hours,
          deadline,
          created_at: now - Duration::hours(created_ago),
          completed_at: None,
          status,
          risk_level: RiskLevel::Safe,
          ai_insight: None,
        };
        a.risk_level = risk::classify_risk_with(deadline, hours, difficulty, now, config);
        a.ai_insight = Some(insight::generate_insight(&a, now, rng));
        a
      },
    )
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::TimeZone;
  use rand::rngs::SmallRng;
  use rand::SeedableRng;

  #[test]
  fn demo_risk_is_computed() {
    let now = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
    let mut rng = SmallRng::seed_from_u64(5);
    let list = demo_assignments(now, &mut rng, &Config::default());

    assert_eq!(list.len(), 3);
    // hard 8h in 18h sits exactly on the buffer edge.
    assert_eq!(list[0].risk_level, RiskLevel::Safe);
    assert_eq!(list[1].risk_level, RiskLevel::Safe);
    assert_eq!(list[2].risk_level, RiskLevel::Safe);
    assert!(list.iter().all(|a| a.ai_insight.is_some()));
    assert!(list.iter().all(|a| a.created_at < now));
  }
}
