//! Binary entrypoint: read JSON lines from stdin, write JSON lines to stdout.
//!
//! Each input line is a Command. Each produces exactly one output line:
//! - A Reply (tagged by "kind") on success
//! - An ErrorOutput when the line cannot be parsed or the command is rejected
//!
//! Logs go to stderr (RUST_LOG, default "warn") so stdout stays a clean stream.

use deadline_engine::types::ErrorOutput;
use deadline_engine::{Command, Config, Engine, EngineError};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(io::stderr)
    .init();

  let config = match Config::from_env() {
    Ok(c) => c,
    Err(e) => {
      tracing::error!(error = %e, "invalid configuration");
      let _ = writeln!(io::stderr(), "deadline-engine: config error: {}", e);
      std::process::exit(2);
    }
  };

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut out = io::BufWriter::new(stdout.lock());
  let mut engine = Engine::new(config);

  for line in stdin.lock().lines() {
    let line = match line {
      Ok(l) => l,
      Err(e) => {
        let _ = writeln!(io::stderr(), "deadline-engine: read error: {}", e);
        std::process::exit(1);
      }
    };

    let trimmed = line.trim();
    if trimmed.is_empty() {
      continue;
    }

    let cmd: Command = match serde_json::from_str(trimmed) {
      Ok(v) => v,
      Err(e) => {
        tracing::warn!(error = %e, "unparseable command");
        emit(&mut out, &ErrorOutput::new(format!("json parse: {}", e)));
        continue;
      }
    };

    match engine.handle(&cmd) {
      Ok(reply) => emit(&mut out, &reply),
      Err(e) => {
        tracing::warn!(error = %e, "command rejected");
        let err = match &e {
          EngineError::Validation { field, reason } => {
            ErrorOutput::new(reason.clone()).with_field(field.clone())
          }
          _ => ErrorOutput::new(e.to_string()),
        };
        emit(&mut out, &err);
      }
    }
    // The UI waits for each reply before sending the next command.
    let _ = out.flush();
  }

  let _ = out.flush();
}

fn emit<W: Write, T: serde::Serialize>(out: &mut W, value: &T) {
  let _ = serde_json::to_writer(&mut *out, value);
  let _ = writeln!(out);
}
