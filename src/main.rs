//! Quire - A markdown blog generator.

mod blog;
mod cli;
mod config;
mod logger;
mod markdown;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => build_site(&config).map(|_| ()),
        Commands::Convert { args } => cli::convert::run_convert(args, &config),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
