//! CLI argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::{AppConfig, OutputFormat};

/// Color state normalizer for color pickers.
#[derive(Parser, Debug)]
#[command(name = "chromastate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Load configuration from TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Save the effective configuration to TOML file
    #[arg(long, value_name = "FILE", global = true)]
    pub save_config: Option<PathBuf>,

    /// Output format: yaml or json
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Log file path (no logging unless given)
    #[arg(long, value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error (default: info)
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Generate shell completions for the specified shell
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a color into hex, RGB, HSL and HSV
    Convert {
        /// Color as JSON (`{"r":255,"g":0,"b":0}`, `null`) or a plain string (`red`, `#0af`)
        input: String,

        /// Hue of the previous state, kept for achromatic colors
        #[arg(long, value_name = "DEGREES")]
        old_hue: Option<f64>,
    },
    /// Check whether the input is a valid hex color (exit status 1 if not)
    CheckHex {
        /// Candidate as JSON or plain string; JSON numbers are never valid
        input: String,
    },
    /// List preset swatches, or resolve a click on one
    Presets {
        /// Preset color to select
        #[arg(long, value_name = "COLOR")]
        select: Option<String>,

        /// Hue of the previous state, kept for achromatic colors
        #[arg(long, value_name = "DEGREES")]
        old_hue: Option<f64>,
    },
}

impl Cli {
    /// Layer CLI flags over a loaded configuration.
    ///
    /// Only flags given on the command line override the file/environment.
    pub fn apply_overrides(&self, mut config: AppConfig) -> AppConfig {
        if let Some(format) = self.format {
            config.format = format;
        }
        let old_hue = match &self.command {
            Some(Command::Convert { old_hue, .. }) | Some(Command::Presets { old_hue, .. }) => {
                *old_hue
            }
            _ => None,
        };
        if old_hue.is_some() {
            config.old_hue = old_hue;
        }
        config
    }
}

/// Interpret a command-line color argument.
///
/// Valid JSON (`null`, `255`, `{"h":0,"s":0,"l":0.5}`, `"red"`) is taken as-is;
/// anything else is treated as a bare string.
pub fn parse_input(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
