//! Command-line interface module.

mod args;
pub mod build;
mod common;
pub mod convert;
pub mod query;

pub use args::{BuildArgs, Cli, Commands, ConvertArgs, OutputPart, QueryArgs};
