//! Render-ready views: one card per assignment plus the dashboard around them.

use chrono::{DateTime, Utc};

use crate::coach;
use crate::config::Config;
use crate::labels;
use crate::scenario;
use crate::stats;
use crate::timeline;
use crate::types::{Assignment, CardView, Dashboard, ScenarioAction, Tab};

pub fn card_view(a: &Assignment, now: DateTime<Utc>, config: &Config) -> CardView {
  CardView {
    id: a.id.clone(),
    title: a.title.clone(),
    subject: a.subject.clone(),
    status: a.status,
    risk_level: a.risk_level,
    risk_label: labels::risk_label(a.risk_level),
    difficulty_label: labels::difficulty_label(a.difficulty),
    deadline_text: labels::relative_deadline_text_with(a.deadline, now, config),
    delay_scenario: scenario::generate_scenario(a, ScenarioAction::Delay),
    start_scenario: scenario::generate_scenario(a, ScenarioAction::Start),
    insight: a.ai_insight.clone(),
  }
}

/// Cards for `tab` in list order, with counts, stats, coach message and timeline.
pub fn dashboard(assignments: &[Assignment], tab: Tab, now: DateTime<Utc>, config: &Config) -> Dashboard {
  let cards = timeline::filter_tab(tab, assignments)
    .into_iter()
    .map(|a| card_view(a, now, config))
    .collect();

  Dashboard {
    tab,
    cards,
    counts: timeline::tab_counts(assignments),
    stats: stats::aggregate_stats_with(assignments, now, config),
    coach: coach::coach_message(assignments),
    timeline: timeline::upcoming(assignments, now, config.timeline_limit),
  }
}
