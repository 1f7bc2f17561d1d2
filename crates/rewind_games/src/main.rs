//! Rewind Games - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{
    AppConfig, ScriptSummary, init_file_logging, init_stderr_logging, parse_script, run_script,
    run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(&cli.config)?;

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => tui(&config),
        Command::Script { json, actions } => script(&config, json, &actions),
    }
}

/// Run the interactive terminal UI
fn tui(config: &AppConfig) -> Result<()> {
    init_file_logging(config.log_file(), config.log_filter())?;
    let theme = config.theme().resolve()?;
    run_tui(theme)
}

/// Run a headless script and print the outcome
#[instrument(skip(config))]
fn script(config: &AppConfig, json: bool, actions: &[String]) -> Result<()> {
    init_stderr_logging(config.log_filter());
    info!("Running script");

    let parsed = parse_script(actions)?;
    let controller = run_script(&parsed)?;
    let summary = ScriptSummary::from_game(controller.game());

    if json {
        let out = serde_json::to_string_pretty(&summary).context("Failed to encode summary")?;
        println!("{}", out);
    } else {
        println!("{}", summary.to_text());
    }
    Ok(())
}
