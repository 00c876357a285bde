use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use surdcalc::{describe, evaluate, CalculatorError, Number};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Print results as JSON
  #[arg(long, global = true)]
  json: bool,

  /// Log filter, e.g. `debug` or `surdcalc=trace` (overrides RUST_LOG)
  #[arg(long, global = true)]
  log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate a single expression
  Eval {
    /// The expression to evaluate, e.g. "2^(1/2) * 8^(1/2)"
    expression: String,
  },
  /// Read expressions from standard input until EOF or `stop`
  Repl,
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  init_logging(cli.log_level.as_deref())?;

  match cli.command {
    Commands::Eval { expression } => {
      let outcome = evaluate(&expression);
      print_outcome(&outcome, cli.json);
      if outcome.is_err() {
        std::process::exit(1);
      }
    }
    Commands::Repl => repl(cli.json)?,
  }
  Ok(())
}

fn init_logging(level: Option<&str>) -> Result<()> {
  let filter = match level {
    Some(level) => EnvFilter::try_new(level)
      .with_context(|| format!("invalid log filter `{}`", level))?,
    None => {
      EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    }
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
  Ok(())
}

fn repl(json: bool) -> Result<()> {
  let stdin = io::stdin();
  let mut stdout = io::stdout();
  write!(stdout, "> ")?;
  stdout.flush()?;
  for line in stdin.lock().lines() {
    let line = line.context("failed to read from stdin")?;
    let input = line.trim();
    if input == "stop" || input == "Stop" {
      break;
    }
    if !input.is_empty() {
      print_outcome(&evaluate(input), json);
    }
    write!(stdout, "> ")?;
    stdout.flush()?;
  }
  Ok(())
}

fn print_outcome(outcome: &Result<Number, CalculatorError>, json: bool) {
  match (outcome, json) {
    (Ok(number), false) => println!("{number}"),
    (Ok(number), true) => println!("{}", describe(number)),
    (Err(error), false) => eprintln!("Error: {}", error),
    (Err(error), true) => {
      println!("{}", serde_json::json!({ "error": error.to_string() }))
    }
  }
}
