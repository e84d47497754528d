//! Dashboard-level coach message derived from the whole list.

use crate::types::{Assignment, CoachMessage, CoachTone, RiskLevel};

/// Rules, first match wins:
/// 1. nothing open -> celebrate
/// 2. two or more open at danger -> danger with the count
/// 3. one open at danger -> danger
/// 4. any open at warning -> warning with the count
/// 5. otherwise -> safe with the open count
pub fn coach_message(assignments: &[Assignment]) -> CoachMessage {
  // Completed work keeps its frozen tier but never counts toward danger or warning.
  let open: Vec<&Assignment> = assignments.iter().filter(|a| !a.is_completed()).collect();
  let danger = open.iter().filter(|a| a.risk_level == RiskLevel::Danger).count();
  let warning = open.iter().filter(|a| a.risk_level == RiskLevel::Warning).count();

  let (tone, message) = if open.is_empty() {
    (
      CoachTone::Celebrate,
      "🎉 Every assignment is done! You worked hard today. Go get some rest!".to_string(),
    )
  } else if danger >= 2 {
    (
      CoachTone::Danger,
      format!(
        "⚠️ {} assignments are at risk. Start with the most urgent one. One at a time, don't give up!",
        danger
      ),
    )
  } else if danger == 1 {
    (
      CoachTone::Danger,
      "🔥 There's an urgent assignment. Start right now and it's not too late. You can do it!"
        .to_string(),
    )
  } else if warning > 0 {
    (
      CoachTone::Warning,
      format!(
        "⏰ {} need{} attention. A little work today makes {} safe. How about 30 minutes?",
        count_phrase(warning),
        if warning == 1 { "s" } else { "" },
        if warning == 1 { "it" } else { "them" }
      ),
    )
  } else {
    (
      CoachTone::Safe,
      format!(
        "✨ {} open and all on track! Keep it that way by chipping away a little today.",
        count_phrase(open.len())
      ),
    )
  };

  CoachMessage { tone, message }
}

fn count_phrase(n: usize) -> String {
  if n == 1 {
    "1 assignment".to_string()
  } else {
    format!("{} assignments", n)
  }
}
