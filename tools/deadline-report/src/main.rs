//! deadline-report: print an assignments file as a terminal dashboard
//!
//! Usage:
//!   deadline-report <assignments.json>                       # as of the current time
//!   deadline-report <assignments.json> --now 2025-01-15T09:00:00Z --seed 7
//!   deadline-report <assignments.json> --tab danger
//!
//! The file is a JSON array of assignment records (camelCase, RFC3339 times).
//! Risk and insight are refreshed for open assignments before printing.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use deadline_engine::refresh;
use deadline_engine::types::{Dashboard, Tab};
use deadline_engine::{view, Assignment, Config};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deadline-report")]
#[command(about = "Print assignment risk, scenarios and stats as a text dashboard", long_about = None)]
struct Cli {
    /// JSON array of assignments
    file: PathBuf,
    /// Evaluate as of this RFC3339 time instead of the system clock
    #[arg(long)]
    now: Option<String>,
    /// Seed for insight selection
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, value_enum, default_value_t = TabArg::All)]
    tab: TabArg,
    /// Offset in minutes for calendar days (e.g. 540 for UTC+9)
    #[arg(long, allow_hyphen_values = true)]
    utc_offset_minutes: Option<i32>,
}

#[derive(Clone, Copy, ValueEnum)]
enum TabArg {
    All,
    Danger,
    Completed,
}

impl From<TabArg> for Tab {
    fn from(t: TabArg) -> Self {
        match t {
            TabArg::All => Tab::All,
            TabArg::Danger => Tab::Danger,
            TabArg::Completed => Tab::Completed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("loading engine config")?;
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(offset) = cli.utc_offset_minutes {
        config.utc_offset_minutes = offset;
    }
    config.validate().context("invalid options")?;

    let now: DateTime<Utc> = match &cli.now {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .with_context(|| format!("invalid --now {}", raw))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };

    let contents = fs::read_to_string(&cli.file)
        .with_context(|| format!("cannot read {}", cli.file.display()))?;
    let mut assignments: Vec<Assignment> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid JSON in {}", cli.file.display()))?;

    let mut rng = match config.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let refreshed = refresh::refresh_all(&mut assignments, now, &mut rng, &config);
    tracing::debug!(refreshed, total = assignments.len(), "assignments loaded");

    let dashboard = view::dashboard(&assignments, cli.tab.into(), now, &config);
    print!("{}", render(&dashboard));
    Ok(())
}

fn render(d: &Dashboard) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", d.coach.message));
    out.push_str(&format!(
        "Today {}/100 | done today {} | open {} | completion {}% | streak {} days\n",
        d.stats.today_score,
        d.stats.completed_today,
        d.stats.total_pending,
        d.stats.average_completion,
        d.stats.streak_days
    ));
    out.push_str(&format!(
        "Open {} | at risk {} | completed {}\n\n",
        d.counts.pending, d.counts.danger, d.counts.completed
    ));

    if d.cards.is_empty() {
        out.push_str("Nothing here.\n");
    }
    for card in &d.cards {
        out.push_str(&format!(
            "[{}] {} ({}, {}) - {}\n",
            card.risk_label, card.title, card.subject, card.difficulty_label, card.deadline_text
        ));
        if let Some(insight) = &card.insight {
            out.push_str(&format!("    {}\n", insight));
        }
        out.push_str(&format!("    {}\n", card.delay_scenario));
        out.push_str(&format!("    {}\n\n", card.start_scenario));
    }

    if !d.timeline.is_empty() {
        out.push_str("Upcoming\n");
        for row in &d.timeline {
            out.push_str(&format!(
                "  {:>6}  {:<32} {:>3.0}%\n",
                row.label, row.title, row.progress_percent
            ));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn renders_cards_and_timeline() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let config = Config {
            seed: Some(1),
            ..Config::default()
        };
        let mut rng = SmallRng::seed_from_u64(1);
        let list = deadline_engine::demo::demo_assignments(now, &mut rng, &config);
        let text = render(&view::dashboard(&list, Tab::All, now, &config));

        assert!(text.contains("[Safe] Economics final report"));
        assert!(text.contains("Tomorrow"));
        assert!(text.contains("Upcoming"));
        assert!(text.contains("Open 3 | at risk 0 | completed 0"));
    }

    #[test]
    fn empty_tab_says_so() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 9, 0, 0).unwrap();
        let text = render(&view::dashboard(&[], Tab::Danger, now, &Config::default()));
        assert!(text.contains("Nothing here."));
        assert!(!text.contains("Upcoming"));
    }
}
