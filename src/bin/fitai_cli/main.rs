// ABOUTME: FitAI CLI - command-line access to plan generation without running the server
// ABOUTME: Generates or adjusts plans from request JSON files and prints derived seeds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitAI CLI
//!
//! Usage:
//! ```bash
//! # Generate the initial plan for a request file
//! fitai-cli generate request.json
//!
//! # Adjust next week's plan from last week's logs, rule-based text only
//! fitai-cli --no-enhance adjust adjust_request.json
//!
//! # Print the seed a request would use
//! fitai-cli seed 42 2024-01-01 --adjusted
//! ```

mod commands;

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitai_planner::logging::LoggingConfig;

#[derive(Parser)]
#[command(
    name = "fitai-cli",
    about = "FitAI weekly workout plan CLI",
    long_about = "Generate, adjust, and inspect FitAI workout plans from the command line."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Skip narrative enhancement even when Gemini is configured
    #[arg(long, global = true)]
    no_enhance: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate the initial plan for a week
    Generate {
        /// Path to a generate-plan request JSON file
        request: PathBuf,
    },
    /// Generate next week's plan adjusted from last week's logs
    Adjust {
        /// Path to an adjust-plan request JSON file
        request: PathBuf,
    },
    /// Print the seed derived for a user and week
    Seed {
        /// Caller identity
        user_id: i64,
        /// Plan week start (YYYY-MM-DD)
        week_start: NaiveDate,
        /// Derive the seed used for adjusted plans
        #[arg(long)]
        adjusted: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing .env file is normal for CLI use
    dotenvy::dotenv().ok();
    LoggingConfig::for_cli(cli.verbose).init()?;

    match cli.command {
        Command::Generate { request } => commands::generate(&request, cli.no_enhance).await,
        Command::Adjust { request } => commands::adjust(&request, cli.no_enhance).await,
        Command::Seed {
            user_id,
            week_start,
            adjusted,
        } => {
            commands::seed(user_id, week_start, adjusted);
            Ok(())
        }
    }
}
