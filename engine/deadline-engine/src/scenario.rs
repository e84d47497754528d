//! "What happens if" narratives: delay until tomorrow vs. start now.

use crate::types::{Assignment, RiskLevel, ScenarioAction};

/// One fixed narrative per (risk level, action). Only start + warning interpolates,
/// with `max(1, estimated_hours - 2)` hours left for tomorrow.
pub fn generate_scenario(assignment: &Assignment, action: ScenarioAction) -> String {
  match (action, assignment.risk_level) {
    (ScenarioAction::Delay, RiskLevel::Danger) => {
      "❌ Put it off until tomorrow: get ready for an all-nighter. Lost sleep drags down your other assignments and the cycle starts."
        .to_string()
    }
    (ScenarioAction::Delay, RiskLevel::Warning) => {
      "⚠️ Put it off until tomorrow: it slides into the danger zone. Weekend plans might have to go..."
        .to_string()
    }
    (ScenarioAction::Delay, RiskLevel::Safe) => {
      "📝 Put it off until tomorrow: still fine, but keep putting it off and it turns urgent."
        .to_string()
    }
    (ScenarioAction::Start, RiskLevel::Danger) => {
      "✅ Start now: you can at least hand something in. Imperfect beats a zero!".to_string()
    }
    (ScenarioAction::Start, RiskLevel::Warning) => {
      let hours = (assignment.estimated_hours - 2.0).max(1.0);
      let unit = if hours == 1.0 { "hour" } else { "hours" };
      format!(
        "✅ Start now: just {} more {} tomorrow and you're done. Free weekend!",
        hours, unit
      )
    }
    (ScenarioAction::Start, RiskLevel::Safe) => {
      "✅ Start now: finish with room to spare and polish the quality. Your professor will notice."
        .to_string()
    }
  }
}
