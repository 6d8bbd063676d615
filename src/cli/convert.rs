//! Convert command implementation.
//!
//! Runs the markdown pipeline on a single file and prints one part of the
//! result to stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::cli::{ConvertArgs, OutputPart};
use crate::config::SiteConfig;
use crate::markdown::{self, ConversionResult, ConvertOptions};

/// Execute convert command
pub fn run_convert(args: &ConvertArgs, config: &SiteConfig) -> Result<()> {
    let markdown = read_input(&args.file)?;
    let options = ConvertOptions::with_summary(config.summary.post_style());
    let result = markdown::convert(&markdown, &options);

    let output = format_part(&result, args.part)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}")?;
    Ok(())
}

/// Read the source file, or stdin for `-`
fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read markdown from stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn format_part(result: &ConversionResult, part: OutputPart) -> Result<String> {
    Ok(match part {
        OutputPart::Body => result.html.clone(),
        OutputPart::Toc => result.toc.clone(),
        OutputPart::Json => serde_json::to_string_pretty(result)?,
    })
}
