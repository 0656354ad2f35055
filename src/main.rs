use clap::Parser;
use std::path::Path;

mod cli;
mod clipboard;
mod core;
mod generators;
mod models;
mod notify;

use crate::cli::{Args, CliCommand};
use crate::core::config::Config;
use crate::models::GenerationOptions;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .init();

    log::info!("🔐 Starting PassForge - Password Generator");

    match args.command {
        Some(CliCommand::Generate {
            length,
            no_uppercase,
            no_lowercase,
            no_numbers,
            symbols,
            copy,
        }) => {
            let defaults = config.generation_options();
            let options = GenerationOptions {
                length: length.map(usize::from).unwrap_or(defaults.length),
                include_uppercase: !no_uppercase && defaults.include_uppercase,
                include_lowercase: !no_lowercase && defaults.include_lowercase,
                include_numbers: !no_numbers && defaults.include_numbers,
                include_symbols: symbols || defaults.include_symbols,
            };
            cli::handlers::handle_generate_command(options, copy, args.json)?;
        }
        None => {
            cli::menu::run_cli_menu(&config)?;
        }
    }

    log::info!("✅ PassForge shutdown complete");
    Ok(())
}
