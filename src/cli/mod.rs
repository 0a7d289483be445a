//! CLI interface for versemeter
//!
//! Argument definitions, persistent settings and the command handlers.

pub mod args;
pub mod commands;
pub mod paths;

pub use args::{Cli, Commands, OutputFormat};
pub use paths::{config_dir, PersistentConfig};
