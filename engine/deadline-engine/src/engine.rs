//! Core engine: holds the assignment list, applies UI commands, refreshes risk.

use chrono::{DateTime, Utc};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::demo;
use crate::error::EngineError;
use crate::insight;
use crate::normalize;
use crate::refresh::{self, RefreshTimer};
use crate::risk;
use crate::stats;
use crate::types::*;
use crate::view;

/// In-memory state container for one UI session.
pub struct Engine {
  config: Config,
  assignments: Vec<Assignment>,
  rng: SmallRng,
  timer: RefreshTimer,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    let rng = match config.seed {
      Some(seed) => SmallRng::seed_from_u64(seed),
      None => SmallRng::from_entropy(),
    };
    let timer = RefreshTimer::new(config.refresh_interval());
    Self {
      config,
      assignments: Vec::new(),
      rng,
      timer,
    }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Newest first.
  pub fn assignments(&self) -> &[Assignment] {
    &self.assignments
  }

  /// Validate a form submission, score it, and put it at the top of the list.
  pub fn create(&mut self, raw: &NewAssignment, now: DateTime<Utc>) -> Result<Assignment, EngineError> {
    let valid = normalize::normalize(raw)?;
    if self.assignments.iter().any(|a| a.id == valid.id) {
      return Err(EngineError::validation("id", "already exists"));
    }

    let risk_level = risk::classify_risk_with(
      valid.deadline,
      valid.estimated_hours,
      valid.difficulty,
      now,
      &self.config,
    );
    let mut assignment = Assignment {
      id: valid.id,
      title: valid.title,
      subject: valid.subject,
      description: valid.description,
      difficulty: valid.difficulty,
      estimated_hours: valid.estimated_hours,
      deadline: valid.deadline,
      created_at: now,
      completed_at: None,
      status: AssignmentStatus::Pending,
      risk_level,
      ai_insight: None,
    };
    assignment.ai_insight = Some(insight::generate_insight(&assignment, now, &mut self.rng));

    tracing::debug!(id = %assignment.id, risk = ?risk_level, "assignment created");
    self.assignments.insert(0, assignment.clone());
    Ok(assignment)
  }

  /// pending -> in-progress. Starting an in-progress assignment is a no-op.
  pub fn start(&mut self, id: &str) -> Result<Assignment, EngineError> {
    let a = self.find_mut(id)?;
    if a.is_completed() {
      return Err(EngineError::InvalidTransition {
        id: id.to_string(),
        from: a.status.as_str(),
        to: AssignmentStatus::InProgress.as_str(),
      });
    }
    a.status = AssignmentStatus::InProgress;
    tracing::debug!(id, "assignment started");
    Ok(a.clone())
  }

  /// Mark completed and stamp `completed_at`. Risk and insight are frozen from here on.
  pub fn complete(&mut self, id: &str, now: DateTime<Utc>) -> Result<Assignment, EngineError> {
    let a = self.find_mut(id)?;
    if a.is_completed() {
      return Err(EngineError::InvalidTransition {
        id: id.to_string(),
        from: a.status.as_str(),
        to: AssignmentStatus::Completed.as_str(),
      });
    }
    a.status = AssignmentStatus::Completed;
    a.completed_at = Some(now);
    tracing::debug!(id, "assignment completed");
    Ok(a.clone())
  }

  /// Host timer tick. Refreshes open assignments when due; returns how many were refreshed.
  pub fn tick(&mut self, now: DateTime<Utc>) -> usize {
    if !self.timer.is_due(now) {
      return 0;
    }
    let count = refresh::refresh_all(&mut self.assignments, now, &mut self.rng, &self.config);
    self.timer.mark_run(now);
    tracing::debug!(count, "risk refresh");
    count
  }

  /// Cancel periodic refresh; later ticks do nothing.
  pub fn stop(&mut self) {
    self.timer.cancel();
    tracing::info!("refresh stopped");
  }

  pub fn stats(&self, now: DateTime<Utc>) -> ProductivityStats {
    stats::aggregate_stats_with(&self.assignments, now, &self.config)
  }

  pub fn dashboard(&self, tab: Tab, now: DateTime<Utc>) -> Dashboard {
    view::dashboard(&self.assignments, tab, now, &self.config)
  }

  /// Replace the list with the demo set.
  pub fn load_demo(&mut self, now: DateTime<Utc>) -> usize {
    self.assignments = demo::demo_assignments(now, &mut self.rng, &self.config);
    self.assignments.len()
  }

  /// Apply one inbound command.
  pub fn handle(&mut self, cmd: &Command) -> Result<Reply, EngineError> {
    let reply = match cmd {
      Command::Create { now, assignment } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Assignment {
          assignment: self.create(assignment, now)?,
        }
      }
      Command::Start { id } => Reply::Assignment {
        assignment: self.start(id)?,
      },
      Command::Complete { id, now } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Assignment {
          assignment: self.complete(id, now)?,
        }
      }
      Command::Tick { now } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Refreshed {
          count: self.tick(now),
        }
      }
      Command::Stats { now } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Stats {
          stats: self.stats(now),
        }
      }
      Command::View { now, tab } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Dashboard {
          dashboard: self.dashboard(*tab, now),
        }
      }
      Command::Demo { now } => {
        let now = normalize::parse_timestamp("now", now)?;
        Reply::Loaded {
          count: self.load_demo(now),
        }
      }
      Command::Stop => {
        self.stop();
        Reply::Stopped
      }
    };
    Ok(reply)
  }

  fn find_mut(&mut self, id: &str) -> Result<&mut Assignment, EngineError> {
    self
      .assignments
      .iter_mut()
      .find(|a| a.id == id)
      .ok_or_else(|| EngineError::NotFound(id.to_string()))
  }
}
