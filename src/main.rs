use clap::Parser;
use console::style;
use std::path::Path;
use std::process::ExitCode;

mod cli;
mod core;
mod utils;
mod models;
mod generators;
mod strength;

use crate::cli::Args;
use crate::core::config::{Config, LOG_LEVEL_ENV};

fn main() -> ExitCode {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    // Logs go to stderr so stdout only carries passwords
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_LEVEL_ENV, "warn"))
        .format_timestamp_secs()
        .format_module_path(true)
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse_from(cli::normalize_args(std::env::args_os()));
    log::debug!("Command line args: {:?}", args);

    let config = Config::load();
    log::debug!("Loaded config: {:?}", config);

    let result = if args.interactive {
        cli::interactive::run_interactive(&config, args.seed)
    } else {
        cli::handlers::run(&args, &config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Generation failed: {:?}", e);
            eprintln!("{} {:#}", style("Error:").red().bold().for_stderr(), e);
            ExitCode::FAILURE
        }
    }
}
