mod applications;
mod auth;
mod catalog;
mod cli;
mod config;
mod display;
mod errors;
mod listings;
mod matching;
mod models;
mod state;
mod store;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::matching::ExactSkillMatcher;
use crate::state::AppState;
use crate::store::json::JsonStore;
use crate::store::seed::ensure_seeded;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Structured logging to stderr; stdout stays clean for command output.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(data_dir = %config.data_dir.display(), "starting stipend");

    let store = Arc::new(JsonStore::new(config.data_dir.clone()));
    let state = AppState {
        store,
        matcher: Arc::new(ExactSkillMatcher),
        config,
    };

    let cli = Cli::parse();

    // First run against an empty data dir gets the demo marketplace, the same
    // way the hosted version ships with demo accounts pre-loaded.
    if let Err(err) = ensure_seeded(state.store.as_ref(), false).await {
        error!(code = err.code(), "seeding failed: {err}");
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(err.exit_code());
    }

    if let Err(err) = cli::run(&state, cli.command).await {
        error!(code = err.code(), "command failed: {err}");
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(err.exit_code());
    }
    Ok(())
}
