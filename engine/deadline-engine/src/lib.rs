//! Deadline Keeper Risk Engine: rule-based assignment risk scoring.
//!
//! Classifies assignments into safe / warning / danger from hours left versus
//! difficulty-weighted effort, picks templated insight and scenario text, formats
//! labels and relative deadlines, and aggregates productivity stats.
//!
//! No DB, no network. "Now" is always an argument and randomness is injected,
//! so everything except the insight pick is a pure function of its inputs.

pub mod clock;
pub mod coach;
pub mod config;
pub mod demo;
pub mod engine;
pub mod error;
pub mod insight;
pub mod labels;
pub mod normalize;
pub mod refresh;
pub mod risk;
pub mod scenario;
pub mod stats;
pub mod timeline;
pub mod types;
pub mod view;

pub use config::Config;
pub use engine::Engine;
pub use error::EngineError;
pub use insight::generate_insight;
pub use labels::{difficulty_label, relative_deadline_text, risk_label};
pub use risk::classify_risk;
pub use scenario::generate_scenario;
pub use stats::aggregate_stats;
pub use types::{Assignment, Command, ProductivityStats, Reply, RiskLevel};
