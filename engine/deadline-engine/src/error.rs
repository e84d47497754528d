//! Structured error types for the deadline engine.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("not found: assignment {0}")]
  NotFound(String),

  #[error("invalid transition: assignment {id}: {from} -> {to}")]
  InvalidTransition {
    id: String,
    from: &'static str,
    to: &'static str,
  },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }
}
