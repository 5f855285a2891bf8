// src/main.rs

use chrono::Local;
use clap::Parser;
use std::process;

// Module declarations
mod cli;
mod config;
mod day_filter;
mod error;
mod file_utils;
mod menu;
mod picker;
mod player;
mod recording;
mod ui;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::day_filter::DayFilter;
use crate::picker::Outcome;
use crate::player::ProcessLauncher;
use crate::ui::TerminalSelector;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run_app() {
        if err.is_empty_result() {
            println!("{}", err);
        } else {
            eprintln!("\nApplication Error: {}", err);
        }
        process::exit(err.exit_code());
    }
}

fn run_app() -> Result<(), error::PickerError> {
    dotenvy::dotenv().ok();
    let cli_args = Cli::parse();

    let mut config = AppConfig::from_env();
    if let Some(dir) = cli_args.dir.as_deref() {
        config = config.with_recordings_dir(dir);
    }
    let filter = DayFilter::from_days_back(cli_args.days_back(), cli_args.exact_day);
    log::debug!(
        "Listing '{}' with {:?}",
        config.recordings_dir.display(),
        filter
    );

    let today = Local::now().date_naive();
    let mut selector = TerminalSelector::new();
    let mut launcher = ProcessLauncher;

    match picker::run(&config, filter, today, &mut selector, &mut launcher)? {
        Outcome::Played { label, handles } => {
            println!("Playing {} ({} file(s)).", label, handles.len());
            for handle in &handles {
                println!("  {}", handle.request.file.display());
            }
        }
        Outcome::Cancelled => {
            println!("Nothing selected.");
        }
    }
    Ok(())
}
