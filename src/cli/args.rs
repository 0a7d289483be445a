//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::line::StressPolicy;

/// Top-level command line
#[derive(Parser)]
#[command(name = "versemeter")]
#[command(about = "Metre and rhyme analysis for stress-marked Russian verse")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze individual lines
    Line {
        /// Lines with stress marks (U+0301 after the stressed vowel)
        #[arg(required = true)]
        lines: Vec<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Handling of stress marks without a preceding vowel
        #[arg(short, long)]
        policy: Option<StressPolicy>,
    },

    /// Classify a raw stress scheme such as 01010101
    Meter {
        /// Scheme of '0' and '1' digits
        scheme: String,
    },

    /// Compare two clauses
    Rhyme {
        /// First clause
        first: String,

        /// Second clause
        second: String,

        /// Treat the arguments as full lines and compare their clauses
        #[arg(short, long)]
        lines: bool,

        /// Similarity threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Analyze a stanza, one line per row
    Verse {
        /// Stanza file (reads stdin if omitted)
        file: Option<PathBuf>,

        /// Stanza name shown in the report
        #[arg(short, long, default_value = "verse")]
        name: String,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Similarity threshold in [0, 1]
        #[arg(short, long)]
        threshold: Option<f64>,
    },

    /// Show pseudo-phonetic and consonance forms
    Phonetic {
        /// Clauses or words to normalize
        #[arg(required = true)]
        clauses: Vec<String>,
    },

    /// Run the sample lines and stanza
    Demo,

    /// Show or change persistent settings
    Settings {
        /// Set the default rhyme threshold
        #[arg(long)]
        set_threshold: Option<f64>,

        /// Set the default stress policy
        #[arg(long)]
        set_policy: Option<StressPolicy>,

        /// Set the default output format
        #[arg(long)]
        set_format: Option<OutputFormat>,

        /// Reset all settings to defaults
        #[arg(long)]
        reset: bool,
    },
}

/// How reports are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
