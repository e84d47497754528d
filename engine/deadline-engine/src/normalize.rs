//! Validate inbound form submissions and timestamps before they reach scoring.

use chrono::{DateTime, Utc};

use crate::error::EngineError;
use crate::types::{Difficulty, NewAssignment};

/// A form submission that passed validation. Risk and insight are not set yet.
#[derive(Debug, Clone)]
pub struct ValidAssignment {
  pub id: String,
  pub title: String,
  pub subject: String,
  pub description: Option<String>,
  pub difficulty: Difficulty,
  pub estimated_hours: f64,
  pub deadline: DateTime<Utc>,
}

pub fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>, EngineError> {
  DateTime::parse_from_rfc3339(raw.trim())
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| EngineError::validation(field, &format!("invalid RFC3339: {}", e)))
}

/// Reject incomplete or nonsensical submissions. A missing id gets a fresh UUID.
pub fn normalize(raw: &NewAssignment) -> Result<ValidAssignment, EngineError> {
  let title = raw.title.trim();
  if title.is_empty() {
    return Err(EngineError::validation("title", "must not be empty"));
  }
  let subject = raw.subject.trim();
  if subject.is_empty() {
    return Err(EngineError::validation("subject", "must not be empty"));
  }

  let difficulty = Difficulty::from_str_loose(&raw.difficulty)
    .ok_or_else(|| EngineError::validation("difficulty", "expected easy|medium|hard"))?;

  if !raw.estimated_hours.is_finite() || raw.estimated_hours <= 0.0 {
    return Err(EngineError::validation(
      "estimatedHours",
      "must be a positive number",
    ));
  }

  let deadline = parse_timestamp("deadline", &raw.deadline)?;

  let id = match raw.id.as_deref().map(str::trim) {
    Some(id) if !id.is_empty() => id.to_string(),
    _ => uuid::Uuid::new_v4().to_string(),
  };

  let description = raw
    .description
    .as_deref()
    .map(str::trim)
    .filter(|d| !d.is_empty())
    .map(str::to_string);

  Ok(ValidAssignment {
    id,
    title: title.to_string(),
    subject: subject.to_string(),
    description,
    difficulty,
    estimated_hours: raw.estimated_hours,
    deadline,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn raw() -> NewAssignment {
    NewAssignment {
      id: None,
      title: "  Programming assignment #5 ".into(),
      subject: "Intro to CS".into(),
      description: Some("   ".into()),
      difficulty: "Medium".into(),
      estimated_hours: 4.0,
      deadline: "2025-01-18T09:00:00+09:00".into(),
    }
  }

  #[test]
  fn valid_submission_is_trimmed_and_parsed() {
    let v = normalize(&raw()).unwrap();
    assert_eq!(v.title, "Programming assignment #5");
    assert_eq!(v.difficulty, Difficulty::Medium);
    assert!(v.description.is_none());
    assert_eq!(v.deadline.to_rfc3339(), "2025-01-18T00:00:00+00:00");
    assert!(uuid::Uuid::parse_str(&v.id).is_ok());
  }

  #[test]
  fn explicit_id_is_kept() {
    let mut r = raw();
    r.id = Some("42".into());
    assert_eq!(normalize(&r).unwrap().id, "42");
  }

  #[test]
  fn non_positive_hours_rejected() {
    for hours in [0.0, -3.0, f64::NAN] {
      let mut r = raw();
      r.estimated_hours = hours;
      let err = normalize(&r).unwrap_err();
      assert!(err.to_string().contains("estimatedHours"), "{}", err);
    }
  }

  #[test]
  fn empty_title_rejected() {
    let mut r = raw();
    r.title = " ".into();
    assert!(normalize(&r).unwrap_err().to_string().contains("title"));
  }

  #[test]
  fn bad_deadline_and_difficulty_rejected() {
    let mut r = raw();
    r.deadline = "tomorrow".into();
    assert!(normalize(&r).unwrap_err().to_string().contains("deadline"));

    let mut r = raw();
    r.difficulty = "extreme".into();
    assert!(normalize(&r).unwrap_err().to_string().contains("difficulty"));
  }
}
