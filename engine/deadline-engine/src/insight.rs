//! Templated insight text, three candidates per risk tier, one picked at random.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::clock;
use crate::types::{Assignment, RiskLevel};

/// Values interpolated into the templates.
#[derive(Debug, Clone, Copy)]
struct Remaining {
  hours: i64,
  days: i64,
  estimated: f64,
}

impl Remaining {
  fn new(assignment: &Assignment, now: DateTime<Utc>) -> Self {
    Self {
      hours: clock::hours_between(now, assignment.deadline),
      days: clock::days_between(now, assignment.deadline),
      estimated: assignment.estimated_hours,
    }
  }

  /// Hours per day if the work is spread over today plus the whole days left.
  fn per_day(&self) -> f64 {
    let spread = (self.days + 1).max(1) as f64;
    (self.estimated / spread).ceil()
  }
}

fn render(level: RiskLevel, r: Remaining) -> [String; 3] {
  match level {
    RiskLevel::Danger => [
      format!(
        "⚠️ {} hours left. Even starting now it's tight. Drop everything else and do this first!",
        r.hours
      ),
      format!(
        "🔥 {} hours to the deadline. Honestly, if you don't start now it's an all-nighter.",
        r.hours
      ),
      format!(
        "😰 You need {} hours and only have {}. The math says this is risky.",
        r.estimated, r.hours
      ),
    ],
    RiskLevel::Warning => [
      format!(
        "⏰ {} days left. Put in {} hours today and you'll finish comfortably.",
        r.days,
        r.per_day()
      ),
      format!(
        "📊 Start now and it's {} hours a day. Totally doable.",
        r.per_day()
      ),
      "💡 Just start with 30 minutes today. Getting started is half the battle.".to_string(),
    ],
    RiskLevel::Safe => [
      "✨ Plenty of time! Starting early still makes the result noticeably better.".to_string(),
      "🎯 You have room to spare. How about aiming for a high-quality result this time?"
        .to_string(),
      format!(
        "🌟 Still {} days left. A little at a time and you'll finish stress-free.",
        r.days
      ),
    ],
  }
}

/// All rendered candidates for the assignment's current `risk_level`.
pub fn insight_candidates(assignment: &Assignment, now: DateTime<Utc>) -> [String; 3] {
  render(assignment.risk_level, Remaining::new(assignment, now))
}

/// Pick one candidate uniformly at random.
pub fn generate_insight<R: Rng + ?Sized>(
  assignment: &Assignment,
  now: DateTime<Utc>,
  rng: &mut R,
) -> String {
  let candidates = insight_candidates(assignment, now);
  candidates
    .choose(rng)
    .cloned()
    .unwrap_or_default()
}
