//! Core types for the deadline engine (JSON contracts + derived views).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
  Easy,
  Medium,
  Hard,
}

impl Difficulty {
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "easy" => Some(Self::Easy),
      "medium" | "normal" => Some(Self::Medium),
      "hard" => Some(Self::Hard),
      _ => None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssignmentStatus {
  Pending,
  InProgress,
  Completed,
}

impl AssignmentStatus {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Pending => "pending",
      Self::InProgress => "in-progress",
      Self::Completed => "completed",
    }
  }
}

/// Risk tier. Variant order is severity order, so `Safe < Warning < Danger`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
  Safe,
  Warning,
  Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioAction {
  Delay,
  Start,
}

/// Dashboard tab filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
  /// Everything not yet completed.
  #[default]
  All,
  /// Open assignments currently at danger.
  Danger,
  Completed,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One assignment as the UI stores it. `risk_level` and `ai_insight` are derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
  pub id: String,
  pub title: String,
  pub subject: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
  pub difficulty: Difficulty,
  pub estimated_hours: f64,
  pub deadline: DateTime<Utc>,
  pub created_at: DateTime<Utc>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub completed_at: Option<DateTime<Utc>>,
  pub status: AssignmentStatus,
  pub risk_level: RiskLevel,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub ai_insight: Option<String>,
}

impl Assignment {
  pub fn is_completed(&self) -> bool {
    self.status == AssignmentStatus::Completed
  }
}

/// Aggregate numbers for the stats card. Recomputed on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityStats {
  pub today_score: u32,
  pub completed_today: usize,
  pub total_pending: usize,
  pub average_completion: u32,
  pub streak_days: u32,
}

// ---------------------------------------------------------------------------
// Derived views
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoachTone {
  Danger,
  Warning,
  Safe,
  Celebrate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachMessage {
  pub tone: CoachTone,
  pub message: String,
}

/// One row of the upcoming-deadline timeline.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEntry {
  pub id: String,
  pub title: String,
  pub risk_level: RiskLevel,
  pub hours_left: i64,
  /// How far along the timeline bar this deadline sits (0..=100).
  pub progress_percent: f64,
  pub label: String,
}

/// Everything an assignment card renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardView {
  pub id: String,
  pub title: String,
  pub subject: String,
  pub status: AssignmentStatus,
  pub risk_level: RiskLevel,
  pub risk_label: &'static str,
  pub difficulty_label: &'static str,
  pub deadline_text: String,
  pub delay_scenario: String,
  pub start_scenario: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub insight: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TabCounts {
  pub pending: usize,
  pub danger: usize,
  pub completed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
  pub tab: Tab,
  pub cards: Vec<CardView>,
  pub counts: TabCounts,
  pub stats: ProductivityStats,
  pub coach: CoachMessage,
  pub timeline: Vec<TimelineEntry>,
}

// ---------------------------------------------------------------------------
// Inbound types (JSON contract: what the UI sends)
// ---------------------------------------------------------------------------

/// Form submission for a new assignment. Validated by `normalize`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssignment {
  #[serde(default)]
  pub id: Option<String>,
  pub title: String,
  pub subject: String,
  #[serde(default)]
  pub description: Option<String>,
  pub difficulty: String,
  pub estimated_hours: f64,
  pub deadline: String,
}

/// One command line from the UI. Unknown fields are silently ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
  /// Form fields sit next to `op` and `now`.
  Create {
    now: String,
    #[serde(flatten)]
    assignment: NewAssignment,
  },
  Start { id: String },
  Complete { id: String, now: String },
  Tick { now: String },
  Stats { now: String },
  View {
    now: String,
    #[serde(default)]
    tab: Tab,
  },
  Demo { now: String },
  Stop,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract: what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
  Assignment { assignment: Assignment },
  Refreshed { count: usize },
  Stats { stats: ProductivityStats },
  Dashboard { dashboard: Dashboard },
  Loaded { count: usize },
  Stopped,
}

/// Structured error output for rejected input lines.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
