//! Configuration errors and collected validation diagnostics.

use owo_colors::OwoColorize;
use std::{fmt, io, path::PathBuf};
use thiserror::Error;

/// Dotted path of a config field as written in `quire.toml`.
///
/// Sections declare theirs as associated constants:
///
/// ```ignore
/// impl SummarySectionConfig {
///     pub const POST: FieldPath = FieldPath::new("summary.post");
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid TOML")]
    Toml(#[from] toml::de::Error),

    // Displayed in full; a #[source] would repeat it in `{:#}` chains
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One invalid config value.
#[derive(Debug, Clone)]
struct Diagnostic {
    field: FieldPath,
    message: String,
    hint: Option<String>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {} {}",
            format!("{}:", self.field.as_str()).cyan().bold(),
            self.message
        )?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "hint:".yellow())?;
        }
        Ok(())
    }
}

/// Validation errors collected across all sections, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<Diagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(Diagnostic {
            field,
            message,
            hint,
        });
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Err(self)` when anything was collected.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let heading = match self.len() {
            1 => "invalid config value:".to_string(),
            n => format!("{n} invalid config values:"),
        };
        write!(f, "{}", heading.red().bold())?;
        for diag in &self.errors {
            write!(f, "\n{diag}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}
