//! Periodic risk refresh: a stateless recompute step plus a host-driven timer.
//!
//! The engine never owns a clock or a thread. The host sends ticks; `RefreshTimer`
//! only decides whether a tick is due, and stops for good once cancelled.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::config::Config;
use crate::insight;
use crate::risk;
use crate::types::Assignment;

/// Recompute `risk_level` then `ai_insight` for every open assignment.
/// Completed assignments keep their frozen values. Returns how many were refreshed.
pub fn refresh_all<R: Rng + ?Sized>(
  assignments: &mut [Assignment],
  now: DateTime<Utc>,
  rng: &mut R,
  config: &Config,
) -> usize {
  let mut refreshed = 0;
  for a in assignments.iter_mut().filter(|a| !a.is_completed()) {
    let previous = a.risk_level;
    a.risk_level =
      risk::classify_risk_with(a.deadline, a.estimated_hours, a.difficulty, now, config);
    a.ai_insight = Some(insight::generate_insight(a, now, rng));
    if a.risk_level != previous {
      tracing::info!(
        id = %a.id,
        from = ?previous,
        to = ?a.risk_level,
        "risk level changed"
      );
    }
    refreshed += 1;
  }
  refreshed
}

/// Decides when the next host tick should actually refresh.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
  interval: Duration,
  last_run: Option<DateTime<Utc>>,
  cancelled: bool,
}

impl RefreshTimer {
  pub fn new(interval: Duration) -> Self {
    Self {
      interval,
      last_run: None,
      cancelled: false,
    }
  }

  /// Due on the first tick, then once `interval` has elapsed since the last run.
  pub fn is_due(&self, now: DateTime<Utc>) -> bool {
    if self.cancelled {
      return false;
    }
    match self.last_run {
      Some(last) => now - last >= self.interval,
      None => true,
    }
  }

  pub fn mark_run(&mut self, now: DateTime<Utc>) {
    self.last_run = Some(now);
  }

  pub fn cancel(&mut self) {
    self.cancelled = true;
  }

  pub fn is_cancelled(&self) -> bool {
    self.cancelled
  }
}
