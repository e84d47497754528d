//! Engine configuration with sane defaults.

use std::path::{Path, PathBuf};

use chrono::{Duration, FixedOffset, Offset, Utc};
use serde::Deserialize;

use crate::error::EngineError;
use crate::types::Difficulty;

/// Env var naming a JSON file with config overrides.
pub const CONFIG_ENV: &str = "DEADLINE_ENGINE_CONFIG";
/// Env var fixing the insight RNG seed.
pub const SEED_ENV: &str = "DEADLINE_ENGINE_SEED";

/// Tunable thresholds for risk scoring and stats.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Effort inflation per difficulty.
  pub easy_multiplier: f64,
  pub medium_multiplier: f64,
  pub hard_multiplier: f64,
  /// Safety margin as a fraction of required hours; separates warning from safe.
  pub buffer_ratio: f64,
  /// Offset used to decide calendar days ("today", "tomorrow").
  pub utc_offset_minutes: i32,
  /// Minimum spacing between two risk refreshes.
  pub refresh_interval_secs: u64,
  /// Today score: `base_score + completed_today * completion_points`, capped at 100.
  pub completion_points: u32,
  pub base_score: u32,
  /// Fixed streak value instead of the history-derived count.
  pub streak_placeholder: Option<u32>,
  /// Max rows in the upcoming-deadline timeline.
  pub timeline_limit: usize,
  /// Seed for insight selection. `None` seeds from OS entropy.
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      easy_multiplier: 1.0,
      medium_multiplier: 1.2,
      hard_multiplier: 1.5,
      buffer_ratio: 0.5,
      utc_offset_minutes: 0,
      refresh_interval_secs: 60,
      completion_points: 25,
      base_score: 20,
      streak_placeholder: None,
      timeline_limit: 5,
      seed: None,
    }
  }
}

impl Config {
  /// Load from `DEADLINE_ENGINE_CONFIG` (if set), then apply `DEADLINE_ENGINE_SEED`.
  pub fn from_env() -> Result<Self, EngineError> {
    let path = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    let seed = std::env::var(SEED_ENV).ok();
    Self::load(path.as_deref(), seed.as_deref())
  }

  /// Optional JSON file, then an optional seed override, then validation.
  pub fn load(path: Option<&Path>, seed: Option<&str>) -> Result<Self, EngineError> {
    let mut config = match path {
      Some(path) => {
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw)?
      }
      None => Config::default(),
    };
    if let Some(seed) = seed {
      let seed = seed
        .trim()
        .parse::<u64>()
        .map_err(|_| EngineError::validation(SEED_ENV, "expected an unsigned integer"))?;
      config.seed = Some(seed);
    }
    config.validate()?;
    Ok(config)
  }

  pub fn validate(&self) -> Result<(), EngineError> {
    for (field, value) in [
      ("easy_multiplier", self.easy_multiplier),
      ("medium_multiplier", self.medium_multiplier),
      ("hard_multiplier", self.hard_multiplier),
    ] {
      if !value.is_finite() || value <= 0.0 {
        return Err(EngineError::validation(field, "must be a positive number"));
      }
    }
    if !self.buffer_ratio.is_finite() || self.buffer_ratio < 0.0 {
      return Err(EngineError::validation("buffer_ratio", "must be >= 0"));
    }
    if FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).is_none() {
      return Err(EngineError::validation(
        "utc_offset_minutes",
        "must be within +/- 24 hours",
      ));
    }
    if self.refresh_interval_secs == 0 {
      return Err(EngineError::validation("refresh_interval_secs", "must be > 0"));
    }
    Ok(())
  }

  pub fn multiplier(&self, difficulty: Difficulty) -> f64 {
    match difficulty {
      Difficulty::Easy => self.easy_multiplier,
      Difficulty::Medium => self.medium_multiplier,
      Difficulty::Hard => self.hard_multiplier,
    }
  }

  /// Calendar offset; falls back to UTC when out of range.
  pub fn offset(&self) -> FixedOffset {
    FixedOffset::east_opt(self.utc_offset_minutes.saturating_mul(60)).unwrap_or_else(|| Utc.fix())
  }

  pub fn refresh_interval(&self) -> Duration {
    Duration::seconds(self.refresh_interval_secs.min(u64::from(u32::MAX)) as i64)
  }
}
