//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Quire markdown blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: quire.toml)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "quire.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the whole site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Convert a single markdown file and print the result
    #[command(visible_alias = "c")]
    Convert {
        #[command(flatten)]
        args: ConvertArgs,
    },

    /// Print post metadata as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Build command arguments
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,
}

/// Which part of a conversion `convert` prints
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputPart {
    /// HTML body fragment
    #[default]
    Body,
    /// Table of contents fragment
    Toc,
    /// Everything, as JSON
    Json,
}

/// Convert command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Markdown file to convert. Use `-` to read from stdin.
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub file: PathBuf,

    /// Part of the result to print
    #[arg(short, long, value_enum, default_value_t = OutputPart::Body)]
    pub part: OutputPart,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Posts or directories to query (omit for all posts).
    /// Use `-` to read paths from stdin (one per line).
    #[arg(value_hint = clap::ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}
