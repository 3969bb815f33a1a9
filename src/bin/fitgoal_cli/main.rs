// ABOUTME: FitGoal CLI - runs the analytics layer over a JSON request document
// ABOUTME: Prints progress reports, macro targets and recipe rankings as pretty JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FitGoal AI
//!
//! Usage:
//! ```bash
//! # Full progress report with a 30 day forecast
//! fitgoal-cli report request.json --days-ahead 30
//!
//! # Daily macro targets for the request's profile
//! fitgoal-cli macros request.json
//!
//! # Rank the request's recipes in 4 clusters, reproducibly
//! fitgoal-cli --seed 42 recipes request.json --k 4
//!
//! # Show the effective configuration after FITGOAL_* overrides
//! fitgoal-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use fitgoal_ai::errors::{AppError, AppResult};
use fitgoal_ai::logging::LoggingConfig;
use fitgoal_ai::service::AnalyticsService;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "fitgoal-cli",
    about = "FitGoal AI analytics CLI",
    long_about = "Runs weight trend, prediction, calorie, plateau, macro and recipe analytics over a JSON request document."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Seed for random choices (recipe clustering, motivational message)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Full progress report
    Report {
        /// Path to the request JSON
        request: PathBuf,

        /// Forecast horizon in days (overrides the request)
        #[arg(long)]
        days_ahead: Option<i64>,
    },

    /// Daily calorie and macro targets
    Macros {
        /// Path to the request JSON
        request: PathBuf,
    },

    /// Cluster and rank the request's recipes
    Recipes {
        /// Path to the request JSON
        request: PathBuf,

        /// Number of clusters (overrides the request)
        #[arg(long)]
        k: Option<usize>,
    },

    /// Print the effective analytics configuration
    Config,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".to_owned();
    }
    logging
        .init()
        .map_err(|e| AppError::internal(e.to_string()))?;

    let service = AnalyticsService::from_global();
    let mut rng = cli
        .seed
        .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    info!(
        seed = ?cli.seed,
        bmr_formula = service.config().nutrition.bmr.formula.description(),
        "FitGoal CLI"
    );

    match cli.command {
        Command::Report {
            request,
            days_ahead,
        } => commands::analysis::report(&service, &request, days_ahead, &mut rng),
        Command::Macros { request } => commands::analysis::macros(&service, &request),
        Command::Recipes { request, k } => {
            commands::analysis::recipes(&service, &request, k, &mut rng)
        }
        Command::Config => helpers::display::print_json(service.config()),
    }
}
