//! Terminal logging with colored `[module]` prefixes.
//!
//! ```ignore
//! log!("build"; "done, {}", plural_count(n, "post"));
//! debug!("markdown"; "{} headings", headings.len());
//! ```
//!
//! Progress lines go to stdout. Warnings, errors and `--verbose` traces go to
//! stderr, which keeps the stdout of `convert` and `query` parseable.

use owo_colors::{OwoColorize, Style};
use std::{
    io::{self, Write},
    sync::atomic::{AtomicBool, Ordering},
};

static VERBOSE: AtomicBool = AtomicBool::new(false);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// `log!("module"; "format {}", args)`
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Like [`log!`], printed only with `--verbose`.
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::debug($module, &format!($($arg)*))
        }
    }};
}

pub fn log(module: &str, message: &str) {
    let line = format!("{} {message}", prefix(module));
    if is_diagnostic(module) {
        writeln!(io::stderr().lock(), "{line}").ok();
    } else {
        let mut out = io::stdout().lock();
        writeln!(out, "{line}").ok();
        out.flush().ok();
    }
}

pub fn debug(module: &str, message: &str) {
    writeln!(io::stderr().lock(), "{} {message}", prefix(module).dimmed()).ok();
}

fn is_diagnostic(module: &str) -> bool {
    module.eq_ignore_ascii_case("warning") || module.eq_ignore_ascii_case("error")
}

fn prefix(module: &str) -> String {
    let style = match module.to_ascii_lowercase().as_str() {
        "build" => Style::new().bright_blue(),
        "static" => Style::new().bright_green(),
        "error" => Style::new().bright_red(),
        _ => Style::new().bright_yellow(),
    };
    format!("[{module}]").style(style.bold()).to_string()
}
